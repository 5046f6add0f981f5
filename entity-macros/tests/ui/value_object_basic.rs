use entity_macros::value_object;

#[value_object]
struct Money {
    amount: i64,
    currency: String,
}

#[value_object(debug = false)]
struct Opaque(String);

impl std::fmt::Debug for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque(..)")
    }
}

fn main() {
    let a = Money {
        amount: 100,
        currency: "EUR".into(),
    };
    let b = a.clone();
    assert_eq!(a, b);
    let _ = format!("{a:?}");

    let o = Opaque("secret".into());
    // 使用手写 Debug，实现可编译则说明未自动派生 Debug
    let _ = format!("{o:?}");
}
