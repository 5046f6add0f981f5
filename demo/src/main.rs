use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use uuid::Uuid;

use entity_domain::clock::{Clock, SystemClock};
use entity_domain::domain_event::{DomainEvent, EventContext, EventEnvelope};
use entity_domain::entity::Entity;
use entity_domain::error::{DomainError, DomainResult};
use entity_domain::eventing::{EventHandler, EventSink, HandledEventType, InMemoryEventSink};
use entity_domain::identity::{
    ApplicationAssignedGenerator, ClientSuppliedGenerator, GenerationContext,
    GenerationStrategy, GeneratorRegistry, IdentitySlot, ValidatedIdentity,
};
use entity_domain::store::{InMemoryStore, Store};
use entity_domain::validation::{ValidationResult, Validator};
use entity_domain::value_object::Version;
use entity_macros::{entity, identity};

#[identity]
struct PostId(Uuid);

/// 订阅者编号：`SUB-` 后接四位数字与一位校验位（前四位数字和模 10）
#[identity]
struct SubscriberNo(String);

impl ValidatedIdentity for SubscriberNo {
    fn parse(raw: &str) -> DomainResult<Self> {
        let invalid = |reason: &str| DomainError::InvalidIdentityFormat {
            input: raw.to_string(),
            reason: reason.to_string(),
        };

        let digits = raw
            .strip_prefix("SUB-")
            .ok_or_else(|| invalid("missing SUB- prefix"))?;
        if digits.len() != 5 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected five digits after prefix"));
        }

        let (body, check) = digits.split_at(4);
        let sum: u32 = body.chars().filter_map(|c| c.to_digit(10)).sum::<u32>() % 10;
        if check.parse::<u32>()? != sum {
            return Err(invalid("checksum mismatch"));
        }
        Ok(Self(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum PostStatus {
    #[default]
    Draft,
    Published,
}

#[entity(id = PostId)]
#[derive(Debug, Clone)]
struct Post {
    title: String,
    status: PostStatus,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum PostEvent {
    Published { id: String, title: String },
    Unpublished { id: String },
}

impl DomainEvent for PostEvent {
    fn event_id(&self) -> &str {
        match self {
            Self::Published { id, .. } | Self::Unpublished { id } => id,
        }
    }

    fn event_type(&self) -> &str {
        match self {
            Self::Published { .. } => "PostEvent.Published",
            Self::Unpublished { .. } => "PostEvent.Unpublished",
        }
    }
}

impl Post {
    const TYPE: &'static str = "post";

    fn draft(id: IdentitySlot<PostId>, title: &str) -> DomainResult<Self> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidArgument {
                constraint: "title must not be blank".into(),
            });
        }
        Ok(Self {
            id,
            version: Version::new(),
            title: title.to_string(),
            status: PostStatus::Draft,
            published_at: None,
        })
    }

    // 幂等守卫：重复发布是无操作
    fn publish(&mut self, clock: &dyn Clock) -> Option<PostEvent> {
        if self.status == PostStatus::Published {
            return None;
        }
        self.status = PostStatus::Published;
        self.published_at = Some(clock.now());
        Some(PostEvent::Published {
            id: Ulid::new().to_string(),
            title: self.title.clone(),
        })
    }
}

// --- 组合校验：标题风格 ---

trait PostValidationHandler {
    fn title_too_long(&mut self, len: usize);
    fn title_is_shouting(&mut self);
}

#[derive(Default)]
struct RecordingPostHandler {
    result: ValidationResult,
}

impl PostValidationHandler for RecordingPostHandler {
    fn title_too_long(&mut self, len: usize) {
        self.result
            .record("title_too_long", format!("title length {len} exceeds 80"));
    }

    fn title_is_shouting(&mut self) {
        self.result
            .record("title_is_shouting", "title must not be all uppercase");
    }
}

struct PostValidator;

impl Validator for PostValidator {
    type Subject = Post;
    type Handler = dyn PostValidationHandler;

    fn validate(&self, post: &Post, handler: &mut Self::Handler) {
        if post.title.len() > 80 {
            handler.title_too_long(post.title.len());
        }
        let has_alpha = post.title.chars().any(|c| c.is_alphabetic());
        if has_alpha && post.title == post.title.to_uppercase() {
            handler.title_is_shouting();
        }
    }
}

struct PrintingHandler;

#[async_trait]
impl EventHandler for PrintingHandler {
    fn handler_name(&self) -> &str {
        "printing"
    }

    async fn handle(&self, event: &EventEnvelope) -> DomainResult<()> {
        println!(
            "  [event] type={} entity={} at={}",
            event.event_type(),
            event.metadata().entity_id(),
            event.metadata().occurred_at()
        );
        Ok(())
    }
}

#[derive(Default)]
struct CountingHandler {
    count: Arc<Mutex<usize>>,
}

#[async_trait]
impl EventHandler for CountingHandler {
    fn handler_name(&self) -> &str {
        "counting"
    }

    async fn handle(&self, _event: &EventEnvelope) -> DomainResult<()> {
        *self.count.lock().unwrap() += 1;
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let clock = SystemClock;
    let sink = Arc::new(InMemoryEventSink::new());
    sink.subscribe(HandledEventType::All, Arc::new(PrintingHandler))
        .await;
    let counter = CountingHandler::default();
    let count = counter.count.clone();
    sink.subscribe(
        HandledEventType::One("PostEvent.Published".into()),
        Arc::new(counter),
    )
    .await;

    // 标识生成：应用分配 + 调用方提供
    let mut post_ids = GeneratorRegistry::<PostId>::new();
    post_ids.register(Arc::new(ApplicationAssignedGenerator::new()));

    let mut subscriber_nos = GeneratorRegistry::<SubscriberNo>::new();
    subscriber_nos.register(Arc::new(ClientSuppliedGenerator::new()));

    let slot = post_ids
        .generate(
            GenerationStrategy::ApplicationAssigned,
            &GenerationContext::default(),
        )
        .await?;
    println!("generated post id: {}", slot.get()?);

    let good = GenerationContext::builder().raw("SUB-12340".to_string()).build();
    let subscriber = subscriber_nos
        .generate(GenerationStrategy::ClientSupplied, &good)
        .await?;
    println!("accepted subscriber no: {}", subscriber.get()?);

    let bad = GenerationContext::builder().raw("SUB-12341".to_string()).build();
    let err = subscriber_nos
        .generate(GenerationStrategy::ClientSupplied, &bad)
        .await
        .unwrap_err();
    println!("rejected subscriber no: {err}");

    // 实体生命周期：构造 -> 发布（幂等） -> 持久化
    let mut post = Post::draft(slot, "Designing entity identity")?;
    if let Some(event) = post.publish(&clock) {
        let envelope = EventEnvelope::enclose(
            &post.identity()?.to_string(),
            Post::TYPE,
            &event,
            EventContext::default(),
            &clock,
        )?;
        sink.publish(&envelope).await?;
    }
    assert!(post.publish(&clock).is_none());
    println!(
        "published once: {} events counted",
        *count.lock().unwrap()
    );

    // 组合校验：收集多条违规而非抛错
    let shouting = Post::draft(
        IdentitySlot::assigned(PostId::new(Uuid::new_v4())),
        "THIS TITLE IS DEFINITELY SHOUTING AT EVERYONE WHO EVER READS THE FRONT PAGE OF THIS BLOG",
    )?;
    let mut handler = RecordingPostHandler::default();
    PostValidator.validate(&shouting, &mut handler);
    for violation in &handler.result {
        println!("  [violation] {}: {}", violation.kind(), violation.message());
    }

    // 持久化与回读
    let store: InMemoryStore<Post> = InMemoryStore::new(|n| {
        PostId::new(Uuid::from_u128(n as u128))
    });
    store.add(&mut post).await?;
    let reloaded = store.find(post.identity()?).await?.unwrap();
    println!(
        "reloaded: id={}, status={:?}, version={}",
        reloaded.identity()?,
        reloaded.status,
        reloaded.version()
    );

    Ok(())
}
