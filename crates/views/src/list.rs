use std::sync::Arc;

use models::project::{Project, ProjectListQuery, ProjectSort, ProjectSortField, ProjectStatus};
use sync::{QueryKey, SyncError, project::ProjectStore};

/// Filter/sort state of the project grid. The whole query is part of the
/// cache key, so any change makes the next load go to the network instead
/// of filtering cached rows client-side.
#[derive(Debug, Clone, Default)]
pub struct ProjectListView {
    query: ProjectListQuery,
}

impl ProjectListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &ProjectListQuery {
        &self.query
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::Projects(self.query.clone())
    }

    pub fn set_region_filter(&mut self, region: Option<String>) {
        self.query.region = region;
    }

    pub fn set_status_filter(&mut self, status: Option<ProjectStatus>) {
        self.query.status = status;
    }

    pub fn set_created_by_filter(&mut self, created_by: Option<String>) {
        self.query.created_by = created_by;
    }

    pub fn set_sort(&mut self, field: ProjectSortField, descending: bool) {
        self.query.sort = Some(ProjectSort { field, descending });
    }

    pub fn clear_sort(&mut self) {
        self.query.sort = None;
    }

    pub async fn rows(&self, store: &ProjectStore) -> Result<Arc<Vec<Project>>, SyncError> {
        store.projects(self.query.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_filter_or_sort_changes_the_cache_key() {
        let mut view = ProjectListView::new();
        let initial = view.query_key();

        view.set_region_filter(Some("West".to_string()));
        let filtered = view.query_key();
        assert_ne!(initial, filtered);

        view.set_sort(ProjectSortField::CreatedAt, true);
        let sorted = view.query_key();
        assert_ne!(filtered, sorted);

        view.set_sort(ProjectSortField::CreatedAt, true);
        assert_eq!(sorted, view.query_key(), "same state, same key");
    }
}
