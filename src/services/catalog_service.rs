use crate::{
    constants::catalog::TRACKS,
    errors::{AppError, AppResult},
    models::domain::Track,
};

/// Read-only access to the static track catalog.
pub struct CatalogService;

impl CatalogService {
    pub fn list_tracks() -> Vec<Track> {
        TRACKS.clone()
    }

    pub fn get_track(track_id: &str) -> AppResult<Track> {
        TRACKS
            .iter()
            .find(|t| t.id == track_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Track '{}' not found", track_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_tracks() {
        let tracks = CatalogService::list_tracks();

        assert_eq!(tracks.len(), 3);
        assert!(tracks.iter().any(|t| t.id == "dive-physics"));
    }

    #[test]
    fn get_track_finds_known_ids() {
        let track = CatalogService::get_track("underwater-welding").expect("known track");

        assert_eq!(track.name, "Underwater Welding");
        assert!(!track.lessons.is_empty());
    }

    #[test]
    fn get_track_rejects_unknown_ids() {
        let result = CatalogService::get_track("basket-weaving");

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
