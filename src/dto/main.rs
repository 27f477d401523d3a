use serde::Serialize;

use crate::domain::action::TeacherAction;
use crate::domain::listing::ListingState;
use crate::domain::teacher::{Teacher, TeacherStatus};
use crate::pagination::Paginated;

/// Entry of the card's action menu.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CardAction {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<TeacherAction> for CardAction {
    fn from(action: TeacherAction) -> Self {
        Self {
            slug: action.slug(),
            label: action.label(),
        }
    }
}

/// Teacher record shaped for the card template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeacherCard {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub status: TeacherStatus,
    pub school: String,
    pub role: String,
    pub roles: Vec<String>,
    pub trackers: u32,
    pub assessments: u32,
    pub last_login: String,
    pub avatar: Option<String>,
    /// Menu entries in display order.
    pub actions: Vec<CardAction>,
}

impl From<Teacher> for TeacherCard {
    fn from(teacher: Teacher) -> Self {
        let actions = TeacherAction::ALL
            .into_iter()
            .filter(|action| action.is_available_for(teacher.status))
            .map(CardAction::from)
            .collect();

        Self {
            initials: teacher.initials(),
            roles: teacher.roles().into_iter().map(str::to_string).collect(),
            id: teacher.id.into_inner(),
            name: teacher.name.into_inner(),
            status: teacher.status,
            school: teacher.school,
            role: teacher.role,
            trackers: teacher.trackers,
            assessments: teacher.assessments,
            last_login: teacher.last_login,
            avatar: teacher.avatar,
            actions,
        }
    }
}

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Current page of teacher cards with its navigation data.
    pub teachers: Paginated<TeacherCard>,
    /// State the page was rendered for, after re-clamping.
    pub listing: ListingState,
    pub has_active_filters: bool,
    /// Listing query without the page, for page links.
    pub base_query: String,
    /// Full listing query, echoed into action forms.
    pub current_query: String,
    /// Listing query with every filter reset.
    pub clear_query: String,
    /// Prefix of the pager links; the page number is appended.
    pub page_link: String,
    pub page_sizes: Vec<usize>,
}
