use crate::domain::listing::ListingState;
use crate::dto::main::{IndexPageData, TeacherCard};
use crate::filter::FilterEngine;
use crate::forms::filters::FiltersForm;
use crate::pagination::{PageSize, Paginated};
use crate::repository::TeacherReader;
use crate::services::{ServiceError, ServiceResult};

/// Filters and paginates the teacher list for the main index page.
pub fn load_index_page<R>(
    repo: &R,
    engine: &FilterEngine,
    form: FiltersForm,
) -> ServiceResult<IndexPageData>
where
    R: TeacherReader + ?Sized,
{
    let listing = ListingState::try_from(form).map_err(|err| {
        log::error!("Failed to parse listing query: {err}");
        ServiceError::from(err)
    })?;

    let teachers = repo.list_teachers().map_err(|err| {
        log::error!("Failed to list teachers: {err}");
        err
    })?;

    let filtered = engine.apply(&teachers, &listing.filter);
    let listing = listing.reconciled(filtered.len());

    let teachers = Paginated::new(filtered, listing.pagination)?.map(TeacherCard::from);

    let current = FiltersForm::from(&listing);
    let current_query = current.to_query();
    let base_query = current.without_page().to_query();
    let clear_query = FiltersForm::from(&listing.clone().cleared()).to_query();
    let page_link = if base_query.is_empty() {
        "/?page=".to_string()
    } else {
        format!("/?{base_query}&page=")
    };

    Ok(IndexPageData {
        teachers,
        has_active_filters: listing.filter.has_active_filters(),
        listing,
        base_query,
        current_query,
        clear_query,
        page_link,
        page_sizes: PageSize::allowed().map(PageSize::get).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::teacher::{Teacher, TeacherStatus};
    use crate::domain::types::{TeacherId, TeacherName};
    use crate::pagination::PageToken;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn teachers(count: usize) -> Vec<Teacher> {
        (1..=count)
            .map(|n| Teacher {
                id: TeacherId::new(n.to_string()).unwrap(),
                name: TeacherName::new(format!("Teacher #{n}")).unwrap(),
                status: if n % 3 == 0 {
                    TeacherStatus::Suspended
                } else {
                    TeacherStatus::Active
                },
                school: "Lincoln Elementary School (4 Mastery Levels)".to_string(),
                role: "Teacher".to_string(),
                trackers: n as u32,
                assessments: 0,
                last_login: "October 15, 2024".to_string(),
                avatar: None,
            })
            .collect()
    }

    fn repo_with(count: usize) -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_list_teachers()
            .times(1)
            .returning(move || Ok(teachers(count)));
        repo
    }

    fn query(q: &str) -> FiltersForm {
        serde_html_form::from_str(q).unwrap()
    }

    #[test]
    fn default_query_shows_first_page() {
        let repo = repo_with(25);
        let data = load_index_page(&repo, &FilterEngine::default(), FiltersForm::default())
            .unwrap();

        assert_eq!(data.teachers.items.len(), 5);
        assert_eq!(data.teachers.items[0].name, "Teacher #1");
        assert_eq!(data.teachers.info.total_items, 25);
        assert_eq!(data.teachers.info.total_pages, 5);
        assert!(!data.has_active_filters);
        assert_eq!(data.base_query, "");
        assert_eq!(data.page_sizes, vec![5, 10, 20, 50]);
    }

    #[test]
    fn third_page_shows_items_eleven_to_fifteen() {
        let repo = repo_with(25);
        let data = load_index_page(&repo, &FilterEngine::default(), query("page=3")).unwrap();

        assert_eq!(data.teachers.info.showing(), (11, 15, 25));
        assert_eq!(data.teachers.items[0].id, "11");
        assert_eq!(data.current_query, "page=3");
        assert_eq!(data.base_query, "");
        assert_eq!(data.page_link, "/?page=");
    }

    #[test]
    fn status_filter_narrows_and_keeps_query() {
        let repo = repo_with(25);
        let data = load_index_page(
            &repo,
            &FilterEngine::default(),
            query("status=suspended&per_page=10"),
        )
        .unwrap();

        assert_eq!(data.teachers.info.total_items, 8);
        assert!(
            data.teachers
                .items
                .iter()
                .all(|t| t.status == TeacherStatus::Suspended)
        );
        assert!(data.has_active_filters);
        assert_eq!(data.base_query, "status=suspended&per_page=10");
        assert_eq!(data.clear_query, "per_page=10");
        assert_eq!(data.page_link, "/?status=suspended&per_page=10&page=");
        assert_eq!(data.teachers.info.window, vec![PageToken::Page(1)]);
    }

    #[test]
    fn page_past_filtered_end_is_clamped_to_first() {
        let repo = repo_with(25);
        let data = load_index_page(
            &repo,
            &FilterEngine::default(),
            query("status=suspended&page=4"),
        )
        .unwrap();

        assert_eq!(data.listing.pagination.page, 1);
        assert_eq!(data.teachers.info.page, 1);
    }

    #[test]
    fn no_matches_render_empty_page() {
        let repo = repo_with(25);
        let data =
            load_index_page(&repo, &FilterEngine::default(), query("search=nobody")).unwrap();

        assert!(data.teachers.items.is_empty());
        assert_eq!(data.teachers.info.total_pages, 1);
        assert!(data.teachers.info.window.is_empty());
    }

    #[test]
    fn invalid_page_is_a_form_error() {
        let repo = MockRepository::new();
        let result = load_index_page(&repo, &FilterEngine::default(), query("page=0"));
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn repository_failure_is_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_list_teachers()
            .returning(|| Err(RepositoryError::DatasetError("unavailable".to_string())));

        let result = load_index_page(&repo, &FilterEngine::default(), FiltersForm::default());
        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
