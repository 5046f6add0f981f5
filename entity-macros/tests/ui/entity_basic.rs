use entity_domain::entity::Entity;
use entity_domain::identity::IdentitySlot;
use entity_domain::value_object::Version;
use entity_macros::{entity, identity};

#[identity]
struct TicketId(String);

#[entity(id = TicketId)]
#[derive(Debug, Clone, Default)]
struct Ticket {
    subject: String,
}

fn main() {
    let mut ticket = Ticket {
        id: IdentitySlot::unassigned(),
        version: Version::new(),
        subject: "door squeaks".into(),
    };

    // 仓储分配策略：绑定前不可读，绑定一次后稳定
    assert!(ticket.identity().is_err());
    ticket.bind_identity(TicketId::new("t-1".into())).unwrap();
    assert_eq!(ticket.identity().unwrap().to_string(), "t-1");
    assert!(ticket.bind_identity(TicketId::new("t-2".into())).is_err());

    assert_eq!(ticket.version().value(), 0);
    ticket.advance_version();
    assert_eq!(ticket.version().value(), 1);

    let _ = ticket.subject;
}
