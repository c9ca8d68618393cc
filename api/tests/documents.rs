use std::collections::HashSet;

use api::{
    carousel::Carousel,
    category::Category,
    project::{ProjectRecord, filter_projects, parse_projects, resolve_project},
};

const WEB: &str = include_str!("../../webapp/public/projects/web_projects_api.json");
const GRAPHICS: &str = include_str!("../../webapp/public/projects/graphics_projects_api.json");

fn load(category: Category) -> Vec<ProjectRecord> {
    let doc = match category {
        Category::Web => WEB,
        Category::Graphics => GRAPHICS,
    };

    parse_projects(doc).expect("shipped document should parse")
}

#[test]
fn shipped_documents_are_displayable() {
    for category in Category::all() {
        let projects = load(category);
        assert!(!projects.is_empty(), "{category} has no projects");

        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted, "{category} not in canonical order");

        let slugs: HashSet<_> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), projects.len(), "{category} has duplicate slugs");

        for project in &projects {
            assert!(
                !project.outcome_images.is_empty(),
                "{} has no outcome images",
                project.slug
            );
        }
    }
}

#[test]
fn web_document_loads_newest_first() {
    let ids: Vec<_> = load(Category::Web).iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn every_slug_resolves_within_its_category() {
    for category in Category::all() {
        let projects = load(category);

        for project in &projects {
            let found = resolve_project(&projects, &project.slug);
            assert_eq!(found, Some(project));
        }

        assert!(resolve_project(&projects, "nonexistent").is_none());
    }
}

#[test]
fn categories_are_disjoint() {
    let web: HashSet<_> = load(Category::Web).into_iter().map(|p| p.slug).collect();
    let graphics: HashSet<_> = load(Category::Graphics)
        .into_iter()
        .map(|p| p.slug)
        .collect();

    assert!(web.is_disjoint(&graphics));
}

#[test]
fn react_search_finds_one_project() {
    let filtered = filter_projects(&load(Category::Web), "React");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].slug, "clinic-booking");
}

#[test]
fn clearing_the_search_restores_every_project() {
    for category in Category::all() {
        let projects = load(category);

        assert_eq!(filter_projects(&projects, ""), projects);
        assert_eq!(filter_projects(&projects, " \t"), projects);
    }
}

#[test]
fn carousel_covers_every_image() {
    let projects = load(Category::Graphics);
    let project = &projects[0];
    let mut carousel = Carousel::new(project.outcome_images.len());
    let mut seen = HashSet::new();

    for _ in 0..project.outcome_images.len() {
        seen.insert(carousel.index());
        carousel.next();
    }

    assert_eq!(seen.len(), project.outcome_images.len());
    assert_eq!(carousel.index(), 0);
}
