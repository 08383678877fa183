use serde::{Deserialize, Serialize};

/// Статусы заявки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    OnReview,
    InProgress,
    NeedsRevision,
    Accepted,
    WithRemarks,
    SentForReview,
    /// Любой статус вне справочника
    Unknown,
}

impl ApplicationStatus {
    /// Человекочитаемое название (так статус хранится в данных)
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::OnReview => "На проверке",
            ApplicationStatus::InProgress => "В работе",
            ApplicationStatus::NeedsRevision => "На доработке",
            ApplicationStatus::Accepted => "Принято",
            ApplicationStatus::WithRemarks => "С замечаниями",
            ApplicationStatus::SentForReview => "Направлено на проверку",
            ApplicationStatus::Unknown => "",
        }
    }

    /// CSS-модификатор бейджа: `status-{class}`
    pub fn style_class(&self) -> &'static str {
        match self {
            ApplicationStatus::OnReview => "on-review",
            ApplicationStatus::InProgress => "in-progress",
            ApplicationStatus::NeedsRevision => "needs-revision",
            ApplicationStatus::Accepted => "approved",
            ApplicationStatus::WithRemarks => "with-remarks",
            ApplicationStatus::SentForReview => "sent-for-review",
            ApplicationStatus::Unknown => "secondary",
        }
    }

    /// Все известные статусы в порядке справочника
    pub fn all() -> Vec<ApplicationStatus> {
        vec![
            ApplicationStatus::OnReview,
            ApplicationStatus::InProgress,
            ApplicationStatus::NeedsRevision,
            ApplicationStatus::Accepted,
            ApplicationStatus::WithRemarks,
            ApplicationStatus::SentForReview,
        ]
    }

    /// Парсинг из строки; неизвестное значение даёт `Unknown`
    pub fn from_label(label: &str) -> Self {
        match label {
            "На проверке" => ApplicationStatus::OnReview,
            "В работе" => ApplicationStatus::InProgress,
            "На доработке" => ApplicationStatus::NeedsRevision,
            "Принято" => ApplicationStatus::Accepted,
            "С замечаниями" => ApplicationStatus::WithRemarks,
            "Направлено на проверку" => ApplicationStatus::SentForReview,
            _ => ApplicationStatus::Unknown,
        }
    }
}
