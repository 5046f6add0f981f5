use entity_macros::identity;
use uuid::Uuid;

#[identity]
struct UserId(Uuid);

#[identity]
struct CountryCode(String);

fn main() {
    let id = UserId::new(Uuid::new_v4());
    let _ = format!("{id:?}"); // 默认启用 Debug，应可用

    let code: CountryCode = "DE".parse().unwrap();
    assert_eq!(code.to_string(), "DE");
    assert_eq!(code, CountryCode::new("DE".into()));

    let raw: String = code.into();
    assert_eq!(raw, "DE");
}
