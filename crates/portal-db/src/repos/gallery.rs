//! Gallery album repository.

use portal_core::entities::GalleryAlbum;

use crate::error::DatabaseError;
use crate::helpers::{format_date, parse_date};
use crate::service::PortalService;

impl PortalService {
    /// Albums, most recent first.
    pub async fn list_albums(&self) -> Result<Vec<GalleryAlbum>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, title, cover_image, photo_count, date FROM gallery_albums ORDER BY date DESC, id",
                (),
            )
            .await?;
        let mut albums = Vec::new();
        while let Some(row) = rows.next().await? {
            albums.push(GalleryAlbum {
                id: row.get::<i64>(0)?,
                title: row.get::<String>(1)?,
                cover_image: row.get::<String>(2)?,
                photo_count: row.get::<i64>(3)?,
                date: parse_date(&row.get::<String>(4)?)?,
            });
        }
        Ok(albums)
    }

    pub(crate) async fn create_album(&self, album: &GalleryAlbum) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO gallery_albums (title, cover_image, photo_count, date) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    album.title.as_str(),
                    album.cover_image.as_str(),
                    album.photo_count,
                    format_date(album.date)
                ],
            )
            .await?;
        Ok(())
    }
}
