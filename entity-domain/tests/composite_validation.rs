//! 组合校验端到端：属性层自洽但关系层非法的聚合，经校验处理器一趟
//! 收集全部违规；跨聚合校验以领域服务建模并宣告校验结论事件。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use uuid::Uuid;

use entity_domain::clock::{Clock, SystemClock};
use entity_domain::domain_event::{DomainEvent, EventContext, EventEnvelope};
use entity_domain::domain_service::DomainService;
use entity_domain::entity::Entity;
use entity_domain::error::{DomainError, DomainResult};
use entity_domain::eventing::{
    EventHandler, EventSink, HandledEventType, InMemoryEventSink,
};
use entity_domain::identity::IdentitySlot;
use entity_domain::store::{InMemoryStore, Store};
use entity_domain::validation::{Specification, ValidationResult, Validator};
use entity_domain::value_object::Version;
use entity_macros::{entity, identity, value_object};

#[identity]
struct CountryCode(String);

#[identity]
struct CustomerId(Uuid);

#[value_object]
struct Address {
    city: String,
    postcode: String,
    country: String,
}

#[entity(id = CountryCode)]
#[derive(Debug, Clone)]
struct Country {
    name: String,
    cities: Vec<String>,
    postcode_len: usize,
}

impl Country {
    fn define(code: CountryCode, name: &str, cities: Vec<&str>, postcode_len: usize) -> Self {
        Self {
            id: IdentitySlot::assigned(code),
            version: Version::new(),
            name: name.to_string(),
            cities: cities.into_iter().map(str::to_string).collect(),
            postcode_len,
        }
    }

    fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    // 邮编规则以规约表达：定长且全为数字
    fn postcode_rule(&self) -> impl Specification<String> + 'static {
        let len = self.postcode_len;
        move |p: &String| p.len() == len && p.chars().all(|c| c.is_ascii_digit())
    }
}

#[entity(id = CustomerId)]
#[derive(Debug, Clone)]
struct Customer {
    name: String,
    address: Address,
}

impl Customer {
    fn open_account(id: CustomerId, name: &str, address: Address) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidArgument {
                constraint: "name must not be blank".into(),
            });
        }
        Ok(Self {
            id: IdentitySlot::assigned(id),
            version: Version::new(),
            name: name.to_string(),
            address,
        })
    }
}

// 按聚合类型定义的校验处理器：每种违规一个方法，调用点编译期检查
trait CustomerValidationHandler {
    fn city_not_in_country(&mut self, city: &str, country: &str);
    fn invalid_postcode(&mut self, postcode: &str);
}

// 把处理器调用记录为有序的 ValidationResult
#[derive(Default)]
struct RecordingCustomerHandler {
    result: ValidationResult,
}

impl CustomerValidationHandler for RecordingCustomerHandler {
    fn city_not_in_country(&mut self, city: &str, country: &str) {
        self.result.record(
            "city_not_in_country",
            format!("city {city} does not belong to country {country}"),
        );
    }

    fn invalid_postcode(&mut self, postcode: &str) {
        self.result
            .record("invalid_postcode", format!("postcode {postcode} is invalid"));
    }
}

// 客户聚合的组合校验：城市归属与邮编格式，按此顺序检查
struct CustomerValidator {
    country: Country,
}

impl Validator for CustomerValidator {
    type Subject = Customer;
    type Handler = dyn CustomerValidationHandler;

    fn validate(&self, customer: &Customer, handler: &mut Self::Handler) {
        if !self.country.contains_city(&customer.address.city) {
            handler.city_not_in_country(&customer.address.city, &self.country.name);
        }
        if !self
            .country
            .postcode_rule()
            .is_satisfied_by(&customer.address.postcode)
        {
            handler.invalid_postcode(&customer.address.postcode);
        }
    }
}

// --- 跨聚合校验：领域服务经仓储取得国家聚合，宣告校验结论事件 ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum CustomerValidationEvent {
    Passed {
        id: String,
        customer_id: String,
    },
    Failed {
        id: String,
        customer_id: String,
        violation_kinds: Vec<String>,
    },
}

impl DomainEvent for CustomerValidationEvent {
    fn event_id(&self) -> &str {
        match self {
            Self::Passed { id, .. } | Self::Failed { id, .. } => id,
        }
    }

    fn event_type(&self) -> &str {
        match self {
            Self::Passed { .. } => "CustomerValidationEvent.Passed",
            Self::Failed { .. } => "CustomerValidationEvent.Failed",
        }
    }
}

struct CustomerCompositionService {
    countries: Arc<InMemoryStore<Country>>,
    sink: Arc<dyn EventSink>,
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl DomainService for CustomerCompositionService {
    type Input = Customer;
    type Output = ValidationResult;
    type Error = DomainError;

    async fn execute(&self, customer: Customer) -> DomainResult<ValidationResult> {
        let code: CountryCode = CountryCode::new(customer.address.country.clone());
        let country = self
            .countries
            .find(&code)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                reason: format!("country not found: {code}"),
            })?;

        let mut handler = RecordingCustomerHandler::default();
        CustomerValidator { country }.validate(&customer, &mut handler);
        let result = handler.result;

        let customer_id = customer.identity()?.to_string();
        let event = if result.is_valid() {
            CustomerValidationEvent::Passed {
                id: Ulid::new().to_string(),
                customer_id: customer_id.clone(),
            }
        } else {
            CustomerValidationEvent::Failed {
                id: Ulid::new().to_string(),
                customer_id: customer_id.clone(),
                violation_kinds: result.iter().map(|v| v.kind().to_string()).collect(),
            }
        };

        let envelope = EventEnvelope::enclose(
            &customer_id,
            "customer",
            &event,
            EventContext::default(),
            self.clock.as_ref(),
        )?;
        self.sink.publish(&envelope).await?;

        Ok(result)
    }
}

fn germany() -> Country {
    Country::define(
        CountryCode::new("DE".into()),
        "Germany",
        vec!["Berlin", "Hamburg", "Munich"],
        5,
    )
}

fn customer_with(city: &str, postcode: &str, country: &str) -> Customer {
    Customer::open_account(
        CustomerId::new(Uuid::new_v4()),
        "Ann Example",
        Address {
            city: city.into(),
            postcode: postcode.into(),
            country: country.into(),
        },
    )
    .unwrap()
}

#[derive(Clone, Default)]
struct OutcomeSpy {
    seen: Arc<Mutex<Vec<EventEnvelope>>>,
}

#[async_trait]
impl EventHandler for OutcomeSpy {
    fn handler_name(&self) -> &str {
        "outcome"
    }

    async fn handle(&self, event: &EventEnvelope) -> DomainResult<()> {
        self.seen.lock().unwrap().push(event.clone());
        Ok(())
    }
}

// 场景 B：城市不属于国家 + 邮编非法 -> 两条违规按规则检查顺序收集，零抛错
#[test]
fn composite_validation_collects_all_violations_in_rule_order() {
    let customer = customer_with("Lyon", "ABC", "DE");

    let mut handler = RecordingCustomerHandler::default();
    CustomerValidator { country: germany() }.validate(&customer, &mut handler);

    let result = handler.result;
    assert!(!result.is_valid());
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].kind(), "city_not_in_country");
    assert_eq!(result[1].kind(), "invalid_postcode");
}

#[test]
fn composite_validation_of_consistent_aggregate_is_empty() {
    let customer = customer_with("Berlin", "10115", "DE");

    let mut handler = RecordingCustomerHandler::default();
    CustomerValidator { country: germany() }.validate(&customer, &mut handler);

    assert!(handler.result.is_valid());
}

// 校验不得变更被校验对象
#[test]
fn validation_does_not_mutate_the_subject() {
    let customer = customer_with("Lyon", "ABC", "DE");
    let snapshot = customer.clone();

    let mut handler = RecordingCustomerHandler::default();
    CustomerValidator { country: germany() }.validate(&customer, &mut handler);

    assert_eq!(customer.address, snapshot.address);
    assert_eq!(customer.name, snapshot.name);
    assert!(customer.same_identity_as(&snapshot));
}

#[tokio::test]
async fn composition_service_announces_failed_outcome() {
    let countries: Arc<InMemoryStore<Country>> =
        Arc::new(InMemoryStore::new(|n| CountryCode::new(format!("C{n}"))));
    let mut germany = germany();
    countries.add(&mut germany).await.unwrap();

    let sink = Arc::new(InMemoryEventSink::new());
    let spy = OutcomeSpy::default();
    sink.subscribe(
        HandledEventType::Many(vec![
            "CustomerValidationEvent.Passed".into(),
            "CustomerValidationEvent.Failed".into(),
        ]),
        Arc::new(spy.clone()),
    )
    .await;

    let service = CustomerCompositionService {
        countries: countries.clone(),
        sink: sink.clone(),
        clock: Arc::new(SystemClock),
    };

    let result = service
        .execute(customer_with("Lyon", "ABC", "DE"))
        .await
        .unwrap();

    // 失败结论：调用方按默认的 fail-closed 选择跳过持久化
    assert!(!result.is_valid());

    let seen = spy.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].event_type(), "CustomerValidationEvent.Failed");
    let decoded: CustomerValidationEvent = seen[0].payload_as().unwrap();
    match decoded {
        CustomerValidationEvent::Failed {
            violation_kinds, ..
        } => {
            assert_eq!(
                violation_kinds,
                vec!["city_not_in_country".to_string(), "invalid_postcode".to_string()]
            );
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn composition_service_announces_passed_outcome() {
    let countries: Arc<InMemoryStore<Country>> =
        Arc::new(InMemoryStore::new(|n| CountryCode::new(format!("C{n}"))));
    let mut germany = germany();
    countries.add(&mut germany).await.unwrap();

    let sink = Arc::new(InMemoryEventSink::new());
    let spy = OutcomeSpy::default();
    sink.subscribe(HandledEventType::All, Arc::new(spy.clone())).await;

    let service = CustomerCompositionService {
        countries,
        sink,
        clock: Arc::new(SystemClock),
    };

    let result = service
        .execute(customer_with("Berlin", "10115", "DE"))
        .await
        .unwrap();

    assert!(result.is_valid());
    let seen = spy.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].event_type(), "CustomerValidationEvent.Passed");
}

#[tokio::test]
async fn composition_service_requires_the_country_aggregate() {
    let countries: Arc<InMemoryStore<Country>> =
        Arc::new(InMemoryStore::new(|n| CountryCode::new(format!("C{n}"))));
    let sink = Arc::new(InMemoryEventSink::new());

    let service = CustomerCompositionService {
        countries,
        sink,
        clock: Arc::new(SystemClock),
    };

    let err = service
        .execute(customer_with("Berlin", "10115", "DE"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
