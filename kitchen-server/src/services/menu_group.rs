//! Menu Group Service

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::{MenuGroup, NewMenuGroup};

use crate::db::repository::MenuGroupRepository;

#[derive(Clone)]
pub struct MenuGroupService {
    menu_groups: Arc<dyn MenuGroupRepository>,
}

impl MenuGroupService {
    pub fn new(menu_groups: Arc<dyn MenuGroupRepository>) -> Self {
        Self { menu_groups }
    }

    pub async fn create(&self, menu_group: NewMenuGroup) -> AppResult<MenuGroup> {
        let saved = self.menu_groups.save(&menu_group).await?;
        tracing::info!(menu_group_id = saved.id(), "Menu group created");
        Ok(saved)
    }

    pub async fn list(&self) -> AppResult<Vec<MenuGroup>> {
        Ok(self.menu_groups.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::FakeDb;

    #[tokio::test]
    async fn test_create_and_list() {
        let service = MenuGroupService::new(FakeDb::new());
        let group = service
            .create(NewMenuGroup::new("한마리메뉴").unwrap())
            .await
            .unwrap();
        assert_eq!(group.name(), "한마리메뉴");
        assert_eq!(service.list().await.unwrap(), vec![group]);
    }
}
