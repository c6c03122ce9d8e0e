//! Serde roundtrip and JSON schema shape tests for the stored record types.

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use portal_core::entities::*;
use portal_core::enums::*;
use portal_core::feed::FeedItem;
use portal_core::responses::{ArchiveStat, SearchResult};

macro_rules! roundtrip {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));
        }
    };
}

fn post() -> JournalPost {
    JournalPost {
        id: 1,
        title: "New Campus Cafeteria Opening Hours".into(),
        slug: "new-campus-cafeteria-opening-hours".into(),
        excerpt: "Open until 8 PM".into(),
        content: "Open until 8 PM".into(),
        priority: false,
        category: "Campus Life".into(),
        published_at: Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap(),
        attachment_url: None,
    }
}

roundtrip!(journal_post_roundtrip, JournalPost, post());

roundtrip!(
    holiday_roundtrip,
    Holiday,
    Holiday {
        id: 3,
        name: "Id-ul-Zuha".into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
        holiday_type: HolidayType::Gazetted,
        is_tentative: true,
        notes: Some("Subject to moon sighting".into()),
        colour_hex: "#ef4444".into(),
    }
);

roundtrip!(
    link_category_roundtrip,
    QuickLinkCategory,
    QuickLinkCategory {
        id: 1,
        name: "Important Links".into(),
        order_index: 0,
        links: vec![QuickLink {
            id: 10,
            category_id: 1,
            title: "CSIR Main".into(),
            url: "https://www.csir.res.in".into(),
            is_external: true,
        }],
    }
);

roundtrip!(
    menu_item_roundtrip,
    MenuItem,
    MenuItem {
        id: 5,
        label: "CSIR Main".into(),
        route: "https://www.csir.res.in".into(),
        kind: MenuKind::External,
        order: 5,
    }
);

roundtrip!(
    search_result_roundtrip,
    SearchResult,
    SearchResult {
        id: 2,
        kind: ContentType::Circular,
        title: "Guidelines for LTC Claims".into(),
        snippet: "Updated checklist".into(),
        date: Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap(),
    }
);

#[test]
fn event_and_search_use_type_key() {
    let event = OrgEvent {
        id: 1,
        title: "Safety Committee Meeting".into(),
        date: Utc.with_ymd_and_hms(2024, 10, 20, 14, 0, 0).unwrap(),
        location: Some("Conf Room A".into()),
        description: Some("Quarterly safety review.".into()),
        kind: EventKind::Meeting,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "meeting");
    assert!(json.get("kind").is_none());
}

#[test]
fn archive_stat_shape() {
    let json = serde_json::to_value(ArchiveStat { year: 2024, count: 3 }).unwrap();
    assert_eq!(json, serde_json::json!({ "year": 2024, "count": 3 }));
}

#[test]
fn schemas_expose_record_fields() {
    let schema = serde_json::to_value(schema_for!(JournalPost)).unwrap();
    let props = schema["properties"].as_object().unwrap();
    for field in ["id", "slug", "priority", "published_at", "attachment_url"] {
        assert!(props.contains_key(field), "missing {field} in JournalPost schema");
    }

    let schema = serde_json::to_value(schema_for!(FeedItem)).unwrap();
    let rendered = schema.to_string();
    assert!(rendered.contains("sort_date"));
    assert!(rendered.contains("content_type"));
}

#[test]
fn feed_item_from_post_carries_post_fields() {
    let json = serde_json::to_value(FeedItem::from(post())).unwrap();
    assert_eq!(json["content_type"], "journal");
    assert_eq!(json["slug"], "new-campus-cafeteria-opening-hours");
    assert_eq!(json["sort_date"], json["published_at"]);
}
