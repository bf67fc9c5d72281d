//! Settings page

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    listing::Selector,
    models::{setting::SettingInput, SettingItem},
    repository::RecordSource,
    services::{
        notify::Notifier,
        stats::{setting_stats, SettingStats},
    },
};

use super::ListView;

pub struct SettingsPage {
    list: ListView<SettingItem>,
}

impl SettingsPage {
    pub fn new(source: Arc<dyn RecordSource<SettingItem>>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            list: ListView::new(source, notifier, page_size),
        }
    }

    /// Category tabs are derived from the loaded data; unknown names are rejected.
    pub fn filter_category(&mut self, value: &str) -> AppResult<()> {
        if !self.list.categories().iter().any(|c| c == value) {
            return Err(AppError::InvalidValue(format!(
                "'{}' is not a settings category",
                value
            )));
        }
        self.list.set_category(Selector::from(value));
        Ok(())
    }

    /// Apply a control change to one setting and persist it.
    ///
    /// The input must fit the setting's kind and constraints; a rejected
    /// input sends nothing.
    pub async fn change_value(&mut self, id: &str, input: SettingInput) -> AppResult<SettingItem> {
        let mut item = self.list.find(id)?.clone();
        item.value.apply(input)?;
        self.list.update(id, &item).await
    }

    /// Flip a toggle setting
    pub async fn toggle(&mut self, id: &str) -> AppResult<SettingItem> {
        let current = self.list.find(id)?;
        match current.value {
            crate::models::SettingValue::Toggle { value } => {
                self.change_value(id, SettingInput::Toggle(!value)).await
            }
            _ => Err(AppError::InvalidValue(format!(
                "{} is a {} setting, not a toggle",
                current.name,
                current.value.kind()
            ))),
        }
    }

    pub fn stats(&self) -> SettingStats {
        setting_stats(self.list.records())
    }
}

impl Deref for SettingsPage {
    type Target = ListView<SettingItem>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for SettingsPage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::SettingValue,
        repository::{fixtures, InMemorySource},
        services::notify::NotificationLog,
    };

    async fn page() -> SettingsPage {
        let mut page = SettingsPage::new(
            Arc::new(InMemorySource::seeded(fixtures::settings())),
            Arc::new(NotificationLog::new()),
            10,
        );
        page.mount().await.unwrap();
        page
    }

    #[tokio::test]
    async fn test_categories_in_first_seen_order() {
        let page = page().await;
        assert_eq!(
            page.categories(),
            vec!["All", "General", "Notifications", "Privacy", "Performance", "Security"]
        );
    }

    #[tokio::test]
    async fn test_filter_category() {
        let mut page = page().await;
        page.filter_category("Security").unwrap();
        assert_eq!(page.page().matching, 2);
        assert!(page.filter_category("Billing").is_err());
    }

    #[tokio::test]
    async fn test_value_changes_respect_constraints() {
        let mut page = page().await;

        let saved = page.toggle("1").await.unwrap();
        assert_eq!(saved.value, SettingValue::Toggle { value: false });

        let saved = page
            .change_value("2", SettingInput::Select("French".into()))
            .await
            .unwrap();
        assert!(matches!(saved.value, SettingValue::Select { ref value, .. } if value == "French"));

        let loads = page.store().loads();
        let result = page.change_value("7", SettingInput::Range(4096)).await;
        assert!(matches!(result, Err(AppError::InvalidValue(_))));
        assert!(page.toggle("7").await.is_err());
        assert_eq!(page.store().loads(), loads);
    }
}
