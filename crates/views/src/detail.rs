use std::{collections::HashSet, sync::Arc};

use models::{
    competitor::{Competitor, CompetitorTranslation},
    note::ProjectNote,
    project::{Project, ProjectTranslation},
    service_area::ServiceArea,
};
use sync::{
    SyncError, competitor::CompetitorStore, note::NoteStore, project::ProjectStore,
    service_area::ServiceAreaStore,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTab {
    Details,
    Competitors,
    Notes,
    ServiceAreas,
}

/// Tabbed project detail view. Tabs are activated explicitly; a tab that
/// has never been selected loads nothing (its accessor returns `Ok(None)`
/// without touching the network).
#[derive(Debug, Clone)]
pub struct ProjectDetailView {
    project_id: String,
    active: DetailTab,
    activated: HashSet<DetailTab>,
}

impl ProjectDetailView {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            active: DetailTab::Details,
            activated: HashSet::from([DetailTab::Details]),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active
    }

    pub fn is_activated(&self, tab: DetailTab) -> bool {
        self.activated.contains(&tab)
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.active = tab;
        self.activated.insert(tab);
    }

    /// Header data: the primary record plus the translation when it loads.
    /// A failing translation fetch degrades to `None` rather than blocking
    /// the whole header.
    pub async fn header(
        &self,
        store: &ProjectStore,
    ) -> Result<(Arc<Project>, Option<Arc<ProjectTranslation>>), SyncError> {
        let project = store.project(&self.project_id).await?;
        let translation = match store.translation(&self.project_id).await {
            Ok(t) => Some(t),
            Err(e) => {
                debug!(project_id = %self.project_id, error = %e, "translation unavailable");
                None
            }
        };
        Ok((project, translation))
    }

    pub async fn competitors(
        &self,
        store: &CompetitorStore,
    ) -> Result<Option<Arc<Vec<Competitor>>>, SyncError> {
        if !self.is_activated(DetailTab::Competitors) {
            return Ok(None);
        }
        store.competitors(&self.project_id).await.map(Some)
    }

    pub async fn competitor_translations(
        &self,
        store: &CompetitorStore,
    ) -> Result<Option<Arc<Vec<CompetitorTranslation>>>, SyncError> {
        if !self.is_activated(DetailTab::Competitors) {
            return Ok(None);
        }
        store.translations(&self.project_id).await.map(Some)
    }

    pub async fn notes(&self, store: &NoteStore) -> Result<Option<Arc<Vec<ProjectNote>>>, SyncError> {
        if !self.is_activated(DetailTab::Notes) {
            return Ok(None);
        }
        store.notes(&self.project_id).await.map(Some)
    }

    pub async fn service_areas(
        &self,
        store: &ServiceAreaStore,
    ) -> Result<Option<Arc<Vec<ServiceArea>>>, SyncError> {
        if !self.is_activated(DetailTab::ServiceAreas) {
            return Ok(None);
        }
        store.service_areas(&self.project_id).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use client::{ApiError, competitors::CompetitorsApi};
    use models::competitor::{CreateCompetitor, UpdateCompetitor};
    use sync::QueryCache;

    use super::*;

    #[derive(Default)]
    struct CountingCompetitorsApi {
        list_calls: AtomicUsize,
    }

    #[async_trait]
    impl CompetitorsApi for CountingCompetitorsApi {
        async fn list(&self, _project_id: &str) -> Result<Vec<Competitor>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn list_translations(
            &self,
            _project_id: &str,
        ) -> Result<Vec<CompetitorTranslation>, ApiError> {
            Ok(vec![])
        }

        async fn create(
            &self,
            _project_id: &str,
            _data: &CreateCompetitor,
        ) -> Result<Competitor, ApiError> {
            unimplemented!("not exercised")
        }

        async fn update(
            &self,
            _project_id: &str,
            _competitor_id: i64,
            _data: &UpdateCompetitor,
        ) -> Result<Competitor, ApiError> {
            unimplemented!("not exercised")
        }
    }

    #[tokio::test]
    async fn unselected_tab_does_not_fetch() {
        let api = Arc::new(CountingCompetitorsApi::default());
        let store = CompetitorStore::new(api.clone(), Arc::new(QueryCache::new()));
        let mut view = ProjectDetailView::new("P-1");

        assert!(view.competitors(&store).await.unwrap().is_none());
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 0);

        view.select_tab(DetailTab::Competitors);
        assert!(view.competitors(&store).await.unwrap().is_some());
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn activation_sticks_after_switching_away() {
        let api = Arc::new(CountingCompetitorsApi::default());
        let store = CompetitorStore::new(api.clone(), Arc::new(QueryCache::new()));
        let mut view = ProjectDetailView::new("P-1");

        view.select_tab(DetailTab::Competitors);
        view.select_tab(DetailTab::Notes);
        assert_eq!(view.active_tab(), DetailTab::Notes);
        assert!(view.is_activated(DetailTab::Competitors));
        assert!(view.competitors(&store).await.unwrap().is_some());
    }
}
