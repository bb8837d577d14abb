use super::*;

#[test]
fn greeting_formats_name_then_email() {
    let identity = Identity {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    };
    assert_eq!(greeting(&identity), "Hello, Alice (alice@example.com)");
}

#[test]
fn greeting_keeps_values_verbatim() {
    let identity = Identity {
        name: String::new(),
        email: "x@y.z ".to_owned(),
    };
    assert_eq!(greeting(&identity), "Hello,  (x@y.z )");
}
