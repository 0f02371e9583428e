//! Menu Service

use std::sync::Arc;

use shared::error::{AppError, AppResult};
use shared::models::{Menu, NewMenu};

use super::rejected;
use crate::db::repository::{
    MenuGroupRepository, MenuProductRepository, MenuRepository, ProductRepository,
};

#[derive(Clone)]
pub struct MenuService {
    menus: Arc<dyn MenuRepository>,
    menu_groups: Arc<dyn MenuGroupRepository>,
    menu_products: Arc<dyn MenuProductRepository>,
    products: Arc<dyn ProductRepository>,
}

impl MenuService {
    pub fn new(
        menus: Arc<dyn MenuRepository>,
        menu_groups: Arc<dyn MenuGroupRepository>,
        menu_products: Arc<dyn MenuProductRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            menus,
            menu_groups,
            menu_products,
            products,
        }
    }

    /// Create a menu after checking its group, its products and its price.
    ///
    /// The menu row is written first; each product line is then stamped with
    /// the new menu id.
    pub async fn create(&self, menu: NewMenu) -> AppResult<Menu> {
        if !self.menu_groups.exists_by_id(menu.menu_group_id()).await? {
            let err = AppError::invalid_argument(format!(
                "Menu group {} does not exist",
                menu.menu_group_id()
            ))
            .with_detail("menu_group_id", menu.menu_group_id());
            rejected("menu.create")(&err);
            return Err(err);
        }

        let products = self.products.find_all_by_id_in(&menu.product_ids()).await?;
        menu.validate_price(&products)
            .inspect_err(rejected("menu.create"))?;

        let saved = self.menus.save(&menu).await?;
        let mut lines = Vec::with_capacity(menu.menu_products().len());
        for line in menu.menu_products() {
            lines.push(self.menu_products.save(saved.id(), line).await?);
        }

        tracing::info!(menu_id = saved.id(), price = %saved.price(), lines = lines.len(), "Menu created");
        Ok(saved.with_menu_products(lines))
    }

    pub async fn list(&self) -> AppResult<Vec<Menu>> {
        let menus = self.menus.find_all().await?;
        let mut result = Vec::with_capacity(menus.len());
        for menu in menus {
            let lines = self.menu_products.find_all_by_menu_id(menu.id()).await?;
            result.push(menu.with_menu_products(lines));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::FakeDb;
    use rust_decimal::Decimal;
    use shared::models::{NewMenuGroup, NewMenuProduct, NewProduct};

    fn service(db: &Arc<FakeDb>) -> MenuService {
        MenuService::new(db.clone(), db.clone(), db.clone(), db.clone())
    }

    /// menu group + one product priced 16000
    async fn seed(db: &Arc<FakeDb>) -> (i64, i64) {
        let group = <FakeDb as MenuGroupRepository>::save(&db, &NewMenuGroup::new("두마리메뉴").unwrap())
            .await
            .unwrap();
        let product = <FakeDb as ProductRepository>::save(
            &db,
            &NewProduct::new("후라이드", Decimal::from(16000)).unwrap(),
        )
        .await
        .unwrap();
        (group.id(), product.id())
    }

    fn two_of(product_id: i64) -> Vec<NewMenuProduct> {
        vec![NewMenuProduct::new(product_id, 2).unwrap()]
    }

    #[tokio::test]
    async fn test_price_equal_to_sum_accepted() {
        let db = FakeDb::new();
        let (group_id, product_id) = seed(&db).await;

        let menu = NewMenu::new("후라이드+후라이드", Some(Decimal::from(32000)), group_id, two_of(product_id))
            .unwrap();
        let saved = service(&db).create(menu).await.unwrap();

        assert_eq!(saved.menu_products().len(), 1);
        let line = saved.menu_products()[0];
        assert_eq!(line.menu_id(), saved.id());
        assert_eq!(line.product_id(), product_id);
        assert_eq!(line.quantity(), 2);
    }

    #[tokio::test]
    async fn test_price_above_sum_rejected() {
        let db = FakeDb::new();
        let (group_id, product_id) = seed(&db).await;

        let menu = NewMenu::new("비싼메뉴", Some(Decimal::from(32001)), group_id, two_of(product_id))
            .unwrap();
        let err = service(&db).create(menu).await.unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(<FakeDb as MenuRepository>::find_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_group_rejected() {
        let db = FakeDb::new();
        let (group_id, product_id) = seed(&db).await;

        let menu = NewMenu::new("메뉴", Some(Decimal::from(1000)), group_id + 100, two_of(product_id))
            .unwrap();
        let err = service(&db).create(menu).await.unwrap_err();
        assert!(err.message.contains("Menu group"));
    }

    #[tokio::test]
    async fn test_unknown_product_rejected() {
        let db = FakeDb::new();
        let (group_id, product_id) = seed(&db).await;

        let menu = NewMenu::new("메뉴", Some(Decimal::from(1000)), group_id, two_of(product_id + 100))
            .unwrap();
        let err = service(&db).create(menu).await.unwrap_err();
        assert!(err.message.contains("does not exist"));
    }

    #[tokio::test]
    async fn test_list_attaches_menu_products() {
        let db = FakeDb::new();
        let (group_id, product_id) = seed(&db).await;
        let service = service(&db);
        for name in ["a", "b"] {
            let menu = NewMenu::new(name, Some(Decimal::from(16000)), group_id, two_of(product_id))
                .unwrap();
            service.create(menu).await.unwrap();
        }

        let menus = service.list().await.unwrap();
        assert_eq!(menus.len(), 2);
        assert!(menus.iter().all(|m| m.menu_products().len() == 1));
    }
}
