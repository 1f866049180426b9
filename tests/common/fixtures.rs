//! Catalog fixtures
//!
//! A small but representative EventCatalog: manifest, resource documents,
//! owner pages and schemas, keyed by URL path.

use std::collections::HashMap;

/// Manifest served at /docs/llm/llms.txt by the default mock catalog.
pub const DEFAULT_MANIFEST: &str = "\
# EventCatalog

## Events
- [Order Placed - OrderPlaced - 1.0.0](http://x/docs/events/OrderPlaced/1.0.0.mdx) - Raised when a customer places an order
- [Order Shipped - OrderShipped - 2.0.0](http://x/docs/events/OrderShipped/2.0.0.mdx) - Raised when an order leaves the warehouse
- [Payment Received - PaymentReceived - 1.2.0](http://x/docs/events/PaymentReceived/1.2.0.mdx)

## Commands
- [Place Order - PlaceOrder - 1.0.0](http://x/docs/commands/PlaceOrder/1.0.0.mdx) - Ask the order service to place an order

## Services
- [Order Service - OrderService - 0.4.0](http://x/docs/services/OrderService/0.4.0.mdx) - Owns the order lifecycle

## Teams
- [platform](http://x/docs/teams/platform.mdx) - Platform Team

## Users
- [jdoe](http://x/docs/users/jdoe.mdx) - John Doe

## Glossary
- [not - a - resource](http://x/ignored)
";

/// Producer/consumer index served at /docs/llm/llms-services.txt.
pub const SERVICES_INDEX: &str = "\
## OrderService
sends: OrderPlaced, OrderShipped
receives: PlaceOrder, PaymentReceived
";

/// Documents served by the default mock catalog, keyed by path.
pub fn default_documents() -> HashMap<String, String> {
    let mut documents = HashMap::new();

    documents.insert(
        "/docs/llm/llms.txt".to_string(),
        DEFAULT_MANIFEST.to_string(),
    );
    documents.insert(
        "/docs/llm/llms-services.txt".to_string(),
        SERVICES_INDEX.to_string(),
    );

    documents.insert(
        "/docs/events/OrderPlaced/1.0.0.mdx".to_string(),
        "# Order Placed\n\nRaised when a customer places an order.".to_string(),
    );
    documents.insert(
        "/docs/events/OrderShipped/2.0.0.mdx".to_string(),
        "# Order Shipped\n\nRaised when an order leaves the warehouse.".to_string(),
    );
    documents.insert(
        "/docs/services/OrderService/0.4.0.mdx".to_string(),
        "# Order Service\n\nOwns the order lifecycle.".to_string(),
    );

    documents.insert(
        "/docs/users/jdoe.mdx".to_string(),
        "# John Doe\n\nDeveloper on the platform team.".to_string(),
    );
    documents.insert(
        "/docs/teams/platform.mdx".to_string(),
        "# Platform Team\n\nOwns shared infrastructure.".to_string(),
    );

    documents.insert(
        "/api/schemas/events/OrderPlaced/1.0.0".to_string(),
        r#"{"type":"object","properties":{"orderId":{"type":"string"}}}"#.to_string(),
    );
    documents.insert(
        "/api/schemas/services/OrderService/0.4.0/asyncapi".to_string(),
        "asyncapi: 3.0.0".to_string(),
    );

    documents.insert(
        "/docs/domains/orders/language.mdx".to_string(),
        "# Ubiquitous Language\n\n**Order**: a customer's request to buy.".to_string(),
    );

    documents
}
