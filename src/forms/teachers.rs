//! Forms posted by the teacher card actions.

use serde::Deserialize;
use validator::Validate;

use crate::domain::action::TeacherAction;
use crate::domain::types::TeacherId;
use crate::forms::FormError;
use crate::forms::filters::FiltersForm;

/// Path segments of `POST /teachers/{id}/{action}`.
#[derive(Debug, Deserialize)]
pub struct TeacherActionPath {
    pub id: String,
    pub action: String,
}

/// Validated target of a card action.
#[derive(Debug, PartialEq, Eq)]
pub struct TeacherActionPayload {
    pub teacher_id: TeacherId,
    pub action: TeacherAction,
}

impl TryFrom<TeacherActionPath> for TeacherActionPayload {
    type Error = FormError;

    fn try_from(path: TeacherActionPath) -> Result<Self, Self::Error> {
        let teacher_id = TeacherId::new(path.id).map_err(|_| FormError::InvalidTeacherId)?;
        let action = path
            .action
            .parse::<TeacherAction>()
            .map_err(|_| FormError::InvalidAction)?;

        Ok(Self { teacher_id, action })
    }
}

/// Hidden form field carrying the listing query to return to.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReturnToForm {
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub return_query: String,
}

impl ReturnToForm {
    /// Listing URL to redirect to. The query is re-encoded through
    /// [`FiltersForm`] so only listing parameters survive.
    pub fn location(&self) -> String {
        if self.validate().is_err() {
            return "/".to_string();
        }

        match serde_html_form::from_str::<FiltersForm>(&self.return_query) {
            Ok(form) => match form.to_query() {
                query if query.is_empty() => "/".to_string(),
                query => format!("/?{query}"),
            },
            Err(err) => {
                log::warn!("Discarding malformed return query: {err}");
                "/".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_parsed_into_payload() {
        let payload = TeacherActionPayload::try_from(TeacherActionPath {
            id: "5".to_string(),
            action: "reset-password".to_string(),
        })
        .unwrap();
        assert_eq!(payload.teacher_id.as_str(), "5");
        assert_eq!(payload.action, TeacherAction::ResetPassword);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result = TeacherActionPayload::try_from(TeacherActionPath {
            id: "5".to_string(),
            action: "archive".to_string(),
        });
        assert!(matches!(result, Err(FormError::InvalidAction)));
    }

    #[test]
    fn location_keeps_listing_parameters_only() {
        let form = ReturnToForm {
            return_query: "status=suspended&page=2&next=https://evil.example".to_string(),
        };
        assert_eq!(form.location(), "/?status=suspended&page=2");
    }

    #[test]
    fn location_defaults_to_index() {
        assert_eq!(ReturnToForm::default().location(), "/");
        let form = ReturnToForm {
            return_query: "page=abc".to_string(),
        };
        assert_eq!(form.location(), "/");
    }
}
