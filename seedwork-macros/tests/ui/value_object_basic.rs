use seedwork_macros::value_object;

#[value_object]
struct Amount {
    value: i64,
}

#[value_object(debug = false)]
struct Secret(i32);

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(..)")
    }
}

#[value_object]
enum Level {
    Low,
    High,
}

fn main() {
    let a = Amount { value: 5 };
    assert_eq!(a.clone(), Amount { value: 5 });
    let _ = format!("{:?}", a);

    assert_eq!(format!("{:?}", Secret(1)), "Secret(..)");
    assert_ne!(Level::Low, Level::High);
}
