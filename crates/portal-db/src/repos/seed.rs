//! Demo content for a fresh store.
//!
//! Each collection is seeded only while its table is empty, so reopening a
//! populated store never duplicates rows. The admin profile is keyed on its
//! username instead.

use chrono::{NaiveDate, TimeZone, Utc};
use serde::Serialize;

use portal_core::entities::{GalleryAlbum, Holiday, MenuItem, OrgEvent, UserProfile};
use portal_core::enums::{EventKind, HolidayType, MenuKind, UserRole};
use portal_core::holiday_csv::colour_for_type;
use portal_core::requests::{CreateCircularRequest, CreatePostRequest};

use crate::error::DatabaseError;
use crate::helpers::midnight_utc;
use crate::service::PortalService;

/// Tables that received demo rows during one seeding pass.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
}

const ADMIN_USERNAME: &str = "admin";

// (title, excerpt, category, published, pinned)
const POSTS: &[(&str, &str, &str, (i32, u32, u32), bool)] = &[
    (
        "Director's Address on Foundation Day",
        "Highlights from the annual address regarding the new strategic roadmap for 2025.",
        "Events",
        (2024, 6, 10),
        true,
    ),
    (
        "New Campus Cafeteria Opening Hours",
        "The cafeteria will now remain open until 8:00 PM on weekdays starting next Monday.",
        "Campus Life",
        (2024, 6, 8),
        false,
    ),
    (
        "IT Maintenance Scheduled for Weekend",
        "Server downtime expected between 10 AM and 2 PM this Saturday.",
        "Notices",
        (2024, 6, 5),
        false,
    ),
    (
        "Research Paper Submission Deadline Extended",
        "The deadline for the internal technical journal has been pushed to July 15th.",
        "Research",
        (2024, 6, 1),
        false,
    ),
];

// (title, summary, ref_number, issued, category)
const CIRCULARS: &[(&str, &str, &str, (i32, u32, u32), &str)] = &[
    (
        "Revision of DA Rates effective Jan 2024",
        "Office Memorandum regarding the enhancement of Dearness Allowance.",
        "FIN/2024/05/20",
        (2024, 5, 20),
        "Finance",
    ),
    (
        "Guidelines for LTC Claims",
        "Updated checklist for submission of Leave Travel Concession bills.",
        "ADM/LTC/24-25",
        (2024, 5, 15),
        "Administration",
    ),
    (
        "Safety Protocols for Structural Engineering Lab",
        "Mandatory safety gear requirements for all personnel entering Lab B.",
        "SAF/LAB/03",
        (2024, 5, 10),
        "Safety",
    ),
    (
        "Holiday List Amendment",
        "Change in date for Id-ul-Zuha subject to moon sighting.",
        "ADM/HOL/2024",
        (2024, 4, 28),
        "HR",
    ),
];

// (name, date, type, tentative, notes)
const HOLIDAYS: &[(&str, (i32, u32, u32), HolidayType, bool, Option<&str>)] = &[
    ("Republic Day", (2024, 1, 26), HolidayType::Gazetted, false, None),
    ("Holi", (2024, 3, 25), HolidayType::Gazetted, false, None),
    ("Good Friday", (2024, 3, 29), HolidayType::Gazetted, false, None),
    ("Id-ul-Fitr", (2024, 4, 11), HolidayType::Gazetted, true, Some("Subject to moon sighting")),
    ("Ram Navami", (2024, 4, 17), HolidayType::Gazetted, false, None),
    ("Mahavir Jayanti", (2024, 4, 21), HolidayType::Gazetted, false, None),
    ("Budha Purnima", (2024, 5, 23), HolidayType::Gazetted, false, None),
    ("Id-ul-Zuha (Bakrid)", (2024, 6, 17), HolidayType::Gazetted, true, None),
    ("Muharram", (2024, 7, 17), HolidayType::Gazetted, true, None),
    ("Independence Day", (2024, 8, 15), HolidayType::Gazetted, false, None),
    ("Raksha Bandhan", (2024, 8, 19), HolidayType::Restricted, false, None),
    ("Ganesh Chaturthi", (2024, 9, 7), HolidayType::Restricted, false, None),
    ("Mahatma Gandhi's Birthday", (2024, 10, 2), HolidayType::Gazetted, false, None),
    ("Dussehra", (2024, 10, 12), HolidayType::Gazetted, false, None),
    ("Diwali", (2024, 10, 31), HolidayType::Gazetted, false, None),
    ("Guru Nanak's Birthday", (2024, 11, 15), HolidayType::Gazetted, false, None),
    ("Christmas Day", (2024, 12, 25), HolidayType::Gazetted, false, None),
];

const MENUS: &[(&str, &str, MenuKind)] = &[
    ("Dashboard", "home", MenuKind::Internal),
    ("Calendar", "calendar", MenuKind::Internal),
    ("Gallery", "gallery", MenuKind::Internal),
    ("About", "about", MenuKind::Page),
    ("CSIR Main", "https://www.csir.res.in", MenuKind::External),
];

// (category, [(title, url, external)])
const LINKS: &[(&str, &[(&str, &str, bool)])] = &[
    (
        "Employee Self Service",
        &[
            ("Leave Portal (ERP)", "#", true),
            ("Payslip Download", "#", false),
            ("Medical Reimbursement", "#", false),
        ],
    ),
    (
        "Key Resources",
        &[
            ("CSIR Website", "https://www.csir.res.in", true),
            ("Telephone Directory", "#", false),
            ("IT Helpdesk", "#", false),
            ("Holiday Calendar", "#", false),
        ],
    ),
];

// (title, photos, date)
const ALBUMS: &[(&str, i64, (i32, u32, u32))] = &[
    ("Foundation Day 2024", 24, (2024, 6, 10)),
    ("Science Day Exhibition", 45, (2024, 2, 28)),
    ("Campus Cleanliness Drive", 12, (2024, 3, 15)),
    ("Structural Safety Workshop", 30, (2024, 4, 5)),
];

fn ymd((y, m, d): (i32, u32, u32)) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DatabaseError::Query(format!("invalid seed date {y}-{m}-{d}")))
}

impl PortalService {
    /// Seed every empty collection with demo content.
    pub async fn seed_demo_data(&self) -> Result<SeedReport, DatabaseError> {
        let mut report = SeedReport::default();

        if self.seed_admin().await? {
            report.seeded.push("users");
        }
        if self.db().count_rows("journal_posts").await? == 0 {
            for &(title, excerpt, category, published, priority) in POSTS {
                let req = CreatePostRequest {
                    priority,
                    category: category.to_string(),
                    ..CreatePostRequest::new(title, excerpt)
                };
                self.create_post_at(&req, midnight_utc(ymd(published)?)).await?;
            }
            report.seeded.push("journal_posts");
        }
        if self.db().count_rows("circulars").await? == 0 {
            for &(title, summary, ref_number, issued, category) in CIRCULARS {
                self.create_circular(&CreateCircularRequest {
                    title: title.to_string(),
                    summary: summary.to_string(),
                    ref_number: ref_number.to_string(),
                    issue_date: ymd(issued)?,
                    category: category.to_string(),
                    attachment_url: None,
                })
                .await?;
            }
            report.seeded.push("circulars");
        }
        if self.db().count_rows("org_events").await? == 0 {
            self.seed_events().await?;
            report.seeded.push("org_events");
        }
        if self.db().count_rows("holidays").await? == 0 {
            for &(name, date, holiday_type, is_tentative, notes) in HOLIDAYS {
                self.create_holiday(&Holiday {
                    id: 0,
                    name: name.to_string(),
                    date: ymd(date)?,
                    holiday_type,
                    is_tentative,
                    notes: notes.map(String::from),
                    colour_hex: colour_for_type(holiday_type.as_str()).to_string(),
                })
                .await?;
            }
            report.seeded.push("holidays");
        }
        if self.db().count_rows("menus").await? == 0 {
            for (order, &(label, route, kind)) in (1_i64..).zip(MENUS) {
                self.create_menu_item(&MenuItem {
                    id: 0,
                    label: label.to_string(),
                    route: route.to_string(),
                    kind,
                    order,
                })
                .await?;
            }
            report.seeded.push("menus");
        }
        if self.db().count_rows("link_categories").await? == 0 {
            for &(name, links) in LINKS {
                let category = self.create_link_category(name).await?;
                for &(title, url, external) in links {
                    self.create_quick_link(category.id, title, url, external).await?;
                }
            }
            report.seeded.push("link_categories");
        }
        if self.db().count_rows("gallery_albums").await? == 0 {
            for (n, &(title, photo_count, date)) in (1..).zip(ALBUMS) {
                self.create_album(&GalleryAlbum {
                    id: 0,
                    title: title.to_string(),
                    cover_image: format!("https://picsum.photos/400/300?random={n}"),
                    photo_count,
                    date: ymd(date)?,
                })
                .await?;
            }
            report.seeded.push("gallery_albums");
        }

        if report.seeded.is_empty() {
            tracing::debug!("content store already populated, nothing seeded");
        } else {
            tracing::info!(tables = ?report.seeded, "seeded demo content");
        }
        Ok(report)
    }

    async fn seed_admin(&self) -> Result<bool, DatabaseError> {
        match self.get_user(ADMIN_USERNAME).await {
            Ok(_) => return Ok(false),
            Err(DatabaseError::NoResult) => {}
            Err(e) => return Err(e),
        }
        self.create_user(&UserProfile {
            id: 0,
            username: ADMIN_USERNAME.to_string(),
            full_name: Some("System Administrator".into()),
            role: UserRole::Admin,
            avatar_url: Some(
                "https://ui-avatars.com/api/?name=Admin&background=0D8ABC&color=fff".into(),
            ),
            department: Some("Computer Centre".into()),
            designation: Some("Senior Technical Officer".into()),
            phone: None,
            bio: Some(
                "Responsible for maintaining the intranet infrastructure and user access.".into(),
            ),
        })
        .await?;
        Ok(true)
    }

    async fn seed_events(&self) -> Result<(), DatabaseError> {
        let events = [
            (
                "Annual Science Conference",
                Utc.with_ymd_and_hms(2024, 10, 15, 9, 0, 0),
                "Auditorium",
                "Gathering of all scientific staff.",
                EventKind::Conference,
            ),
            (
                "Safety Committee Meeting",
                Utc.with_ymd_and_hms(2024, 10, 20, 14, 0, 0),
                "Conf Room A",
                "Quarterly safety review.",
                EventKind::Meeting,
            ),
        ];
        for (title, date, location, description, kind) in events {
            let date = date
                .single()
                .ok_or_else(|| DatabaseError::Query(format!("invalid seed time for {title}")))?;
            self.create_event(&OrgEvent {
                id: 0,
                title: title.to_string(),
                date,
                location: Some(location.to_string()),
                description: Some(description.to_string()),
                kind,
            })
            .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    #[tokio::test]
    async fn seeds_every_collection_once() {
        let svc = test_service().await;
        let first = svc.seed_demo_data().await.unwrap();
        assert_eq!(first.seeded.len(), 8);

        assert_eq!(svc.list_posts(None, None).await.unwrap().len(), 4);
        assert_eq!(svc.list_circulars(None, None).await.unwrap().len(), 4);
        assert_eq!(svc.list_events().await.unwrap().len(), 2);
        assert_eq!(svc.list_holidays(None).await.unwrap().len(), 17);
        assert_eq!(svc.list_menus().await.unwrap().len(), 5);
        assert_eq!(svc.list_albums().await.unwrap().len(), 4);
        let links = svc.list_link_categories().await.unwrap();
        assert_eq!(links.iter().map(|c| c.links.len()).collect::<Vec<_>>(), [3, 4]);

        let second = svc.seed_demo_data().await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(svc.list_posts(None, None).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn seeded_content_reads_back_typed() {
        let svc = test_service().await;
        svc.seed_demo_data().await.unwrap();

        let posts = svc.list_posts(None, None).await.unwrap();
        assert_eq!(posts[0].slug, "director-s-address-on-foundation-day");
        assert!(posts[0].priority);

        let fitr = svc
            .list_holidays(None)
            .await
            .unwrap()
            .into_iter()
            .find(|h| h.name == "Id-ul-Fitr")
            .unwrap();
        assert!(fitr.is_tentative);
        assert_eq!(fitr.notes.as_deref(), Some("Subject to moon sighting"));

        let menus = svc.list_menus().await.unwrap();
        assert_eq!(menus[4].kind, MenuKind::External);
        assert_eq!(menus[4].order, 5);

        let admin = svc.get_user("admin").await.unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(admin.email("csir.res.in"), "admin@csir.res.in");

        let albums = svc.list_albums().await.unwrap();
        assert_eq!(albums[0].title, "Foundation Day 2024");
        assert_eq!(albums[0].cover_image, "https://picsum.photos/400/300?random=1");
    }
}
