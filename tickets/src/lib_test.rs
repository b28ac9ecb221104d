use super::*;

fn ticket(id: i64) -> Ticket {
    Ticket {
        id,
        title: format!("ticket {id}"),
        description: "details".to_owned(),
        category: TicketCategory::General,
        priority: TicketPriority::Low,
        status: TicketStatus::Open,
        resolution: None,
    }
}

#[test]
fn known_values_parse() {
    for category in TicketCategory::KNOWN {
        assert_eq!(TicketCategory::parse(category.as_str()), Some(category.clone()));
    }
    for priority in TicketPriority::KNOWN {
        assert_eq!(TicketPriority::parse(priority.as_str()), Some(priority.clone()));
    }
    for status in TicketStatus::KNOWN {
        assert_eq!(TicketStatus::parse(status.as_str()), Some(status.clone()));
    }
}

#[test]
fn parse_is_case_sensitive_and_rejects_unknown() {
    assert_eq!(TicketCategory::parse("Billing"), None);
    assert_eq!(TicketPriority::parse("urgent"), None);
    assert_eq!(TicketStatus::parse("in progress"), None);
}

#[test]
fn defaults_match_unassigned_ticket() {
    assert_eq!(TicketCategory::default(), TicketCategory::General);
    assert_eq!(TicketPriority::default(), TicketPriority::Low);
    assert_eq!(TicketStatus::default(), TicketStatus::Open);
}

#[test]
fn status_label_replaces_underscores() {
    assert_eq!(TicketStatus::InProgress.label(), "in progress");
    assert_eq!(TicketStatus::Other("waiting_on_customer".into()).label(), "waiting on customer");
}

#[test]
fn ticket_deserializes_unknown_enum_values_as_other() {
    let json = serde_json::json!({
        "id": 7,
        "title": "Printer on fire",
        "description": "Smoke everywhere",
        "category": "hardware",
        "priority": "urgent",
        "status": "on_hold",
        "resolution": null
    });
    let t: Ticket = serde_json::from_value(json).unwrap();
    assert_eq!(t.category, TicketCategory::Other("hardware".into()));
    assert_eq!(t.priority, TicketPriority::Other("urgent".into()));
    assert_eq!(t.status, TicketStatus::Other("on_hold".into()));
    assert!(!t.category.is_known());
}

#[test]
fn ticket_serializes_enums_as_wire_strings() {
    let mut t = ticket(3);
    t.category = TicketCategory::Billing;
    t.priority = TicketPriority::High;
    t.status = TicketStatus::InProgress;
    t.resolution = Some("Suggested Solution: reset".into());
    let value = serde_json::to_value(&t).unwrap();
    assert_eq!(value["category"], "billing");
    assert_eq!(value["priority"], "high");
    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["resolution"], "Suggested Solution: reset");
}

#[test]
fn other_values_serialize_verbatim() {
    let value = serde_json::to_value(TicketStatus::Other("on_hold".into())).unwrap();
    assert_eq!(value, serde_json::json!("on_hold"));
}

#[test]
fn ticket_missing_triage_fields_uses_defaults() {
    let json = serde_json::json!({ "id": 1, "title": "t", "description": "d" });
    let t: Ticket = serde_json::from_value(json).unwrap();
    assert_eq!(t.category, TicketCategory::General);
    assert_eq!(t.priority, TicketPriority::Low);
    assert_eq!(t.status, TicketStatus::Open);
    assert!(t.resolution.is_none());
}

#[test]
fn validate_trims_fields() {
    let input = NewTicket::new("  Cannot login  ", "\tPassword reset loops\n");
    let valid = input.validate().unwrap();
    assert_eq!(valid.title, "Cannot login");
    assert_eq!(valid.description, "Password reset loops");
}

#[test]
fn validate_rejects_blank_title_or_description() {
    assert_eq!(
        NewTicket::new("", "desc").validate(),
        Err(TicketValidationError::MissingRequiredFields)
    );
    assert_eq!(
        NewTicket::new("title", "   ").validate(),
        Err(TicketValidationError::MissingRequiredFields)
    );
    assert_eq!(
        NewTicket::default().validate(),
        Err(TicketValidationError::MissingRequiredFields)
    );
}

#[test]
fn validation_error_message_is_user_facing() {
    assert_eq!(TicketValidationError::MissingRequiredFields.to_string(), REQUIRED_FIELDS_MESSAGE);
}

#[test]
fn sort_newest_first_orders_by_descending_id() {
    let mut list = vec![ticket(2), ticket(9), ticket(1), ticket(5)];
    sort_newest_first(&mut list);
    let ids: Vec<i64> = list.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![9, 5, 2, 1]);
    assert!(list.windows(2).all(|w| w[0].id >= w[1].id));
}

#[test]
fn sort_newest_first_handles_empty() {
    let mut list: Vec<Ticket> = Vec::new();
    sort_newest_first(&mut list);
    assert!(list.is_empty());
}
