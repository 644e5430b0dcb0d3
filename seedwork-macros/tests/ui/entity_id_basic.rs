use seedwork_domain::identity::Identifier;
use seedwork_macros::entity_id;
use std::collections::HashSet;

#[entity_id(prefix = "ord-", label = "Order id")]
struct OrderId(String);

#[entity_id]
#[derive(Hash)]
struct TagId(String);

fn main() {
    let id = OrderId::parse("ord-42").unwrap();
    assert_eq!(id.as_str(), "ord-42");
    assert_eq!(OrderId::PREFIX, "ord-");
    assert!(OrderId::generate().to_string().starts_with("ord-"));

    let err = OrderId::parse("42").unwrap_err();
    assert_eq!(err.to_string(), "invalid value: Order id must start with \"ord-\"");

    let parsed: OrderId = "ord-7".parse().unwrap();
    let raw: String = parsed.clone().into();
    assert_eq!(raw, "ord-7");
    assert!(OrderId::try_from("ord-").is_err());

    let mut set = HashSet::new();
    set.insert(TagId::parse("t").unwrap());
    assert!(set.contains(&TagId::parse("t").unwrap()));

    fn takes_identifier<I: Identifier>(id: &I) -> String {
        id.as_str().to_owned()
    }
    assert_eq!(takes_identifier(&parsed), "ord-7");
}
