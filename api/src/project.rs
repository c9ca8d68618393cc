use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{category::Category, config::DataConfig};

// structs and types

pub type ProjectId = i64;

// one entry of a category document
//
// the field names follow the documents, which were written by hand and are shared with
// the image directories, so they are renamed rather than reshaped
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub slug: String,
    pub overview: String,
    pub problem: String,
    pub design_process: String,
    pub outcome_images: Vec<String>,
    pub technologies_used: Vec<String>,
    pub lessons_learnt: String,
    pub how_we_met: String,
    pub return_client: bool,
}

impl ProjectRecord {
    pub fn image_url(&self, dir: &str, index: usize) -> Option<String> {
        self.outcome_images
            .get(index)
            .map(|file| format!("{}/{}", dir.trim_end_matches('/'), file))
    }

    pub fn thumbnail(&self, dir: &str) -> Option<String> {
        self.image_url(dir, 0)
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.overview.to_lowercase().contains(needle)
            || self
                .technologies_used
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle))
    }
}

// loading

// the canonical order is newest (highest id) first; sort_by is stable, so records
// sharing an id keep the order they had in the document
pub fn sort_canonical(mut projects: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
    projects.sort_by(|a, b| b.id.cmp(&a.id));
    projects
}

pub fn parse_projects(doc: &str) -> anyhow::Result<Vec<ProjectRecord>> {
    let projects: Vec<ProjectRecord> = serde_json::from_str(doc)?;

    Ok(sort_canonical(projects))
}

pub async fn fetch_projects(
    category: Category,
    data: &DataConfig,
) -> anyhow::Result<Vec<ProjectRecord>> {
    let url = category.data_url(data);

    debug!(category = %category, url, "fetching projects");

    let resp = Request::get(url).send().await?;

    if !resp.ok() {
        return Err(anyhow::Error::msg(format!(
            "failed to load {category} projects: {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    parse_projects(&resp.text().await?)
}

// views

// a blank term leaves the canonical list untouched; any other term is matched as typed,
// surrounding whitespace included
pub fn filter_projects(projects: &[ProjectRecord], term: &str) -> Vec<ProjectRecord> {
    if term.trim().is_empty() {
        return projects.to_vec();
    }

    let needle = term.to_lowercase();

    projects
        .iter()
        .filter(|project| project.matches(&needle))
        .cloned()
        .collect()
}

pub fn resolve_project<'a>(projects: &'a [ProjectRecord], slug: &str) -> Option<&'a ProjectRecord> {
    projects.iter().find(|project| project.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ProjectId, title: &str, slug: &str, tech: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id,
            title: title.to_owned(),
            slug: slug.to_owned(),
            overview: format!("overview of {title}"),
            problem: String::new(),
            design_process: String::new(),
            outcome_images: vec![format!("{slug}-1.png"), format!("{slug}-2.png")],
            technologies_used: tech.iter().map(|t| t.to_string()).collect(),
            lessons_learnt: String::new(),
            how_we_met: String::new(),
            return_client: false,
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        sort_canonical(vec![
            record(1, "Bakery Site", "bakery", &["HTML", "CSS"]),
            record(3, "Booking Dashboard", "booking", &["React", "Tailwind"]),
            record(2, "School Portal", "school", &["Vue", "Firebase"]),
        ])
    }

    #[test]
    fn parse_sorts_descending() {
        let doc = r#"[
            {"id":1,"title":"a","slug":"a","overview":"","problem":"","designProcess":"",
             "outcomeImages":["a.png"],"technologiesUsed":[],"lessonsLearnt":"","howWeMet":"","returnClient":false},
            {"id":3,"title":"c","slug":"c","overview":"","problem":"","designProcess":"",
             "outcomeImages":["c.png"],"technologiesUsed":[],"lessonsLearnt":"","howWeMet":"","returnClient":true},
            {"id":2,"title":"b","slug":"b","overview":"","problem":"","designProcess":"",
             "outcomeImages":["b.png"],"technologiesUsed":[],"lessonsLearnt":"","howWeMet":"","returnClient":false}
        ]"#;

        let projects = parse_projects(doc).unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![3, 2, 1]);
        assert!(projects[0].return_client);
    }

    #[test]
    fn parse_rejects_malformed_documents() {
        assert!(parse_projects("{\"id\": 1}").is_err());
        assert!(parse_projects("not json").is_err());
    }

    #[test]
    fn equal_ids_keep_document_order() {
        let projects = sort_canonical(vec![
            record(5, "first", "first", &[]),
            record(7, "newest", "newest", &[]),
            record(5, "second", "second", &[]),
        ]);
        let slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();

        assert_eq!(slugs, vec!["newest", "first", "second"]);
    }

    #[test]
    fn empty_term_is_identity() {
        let projects = sample();

        assert_eq!(filter_projects(&projects, ""), projects);
    }

    #[test]
    fn blank_term_is_identity() {
        let projects = sample();

        assert_eq!(filter_projects(&projects, "   "), projects);
        assert_eq!(filter_projects(&projects, " \t"), projects);
        assert_eq!(filter_projects(&projects, "\n"), projects);
    }

    #[test]
    fn padded_term_is_matched_as_typed() {
        let projects = sample();

        // "site" appears in "Bakery Site" but nothing contains " site "
        assert_eq!(filter_projects(&projects, "site").len(), 1);
        assert!(filter_projects(&projects, " site ").is_empty());
    }

    #[test]
    fn technology_match() {
        let filtered = filter_projects(&sample(), "React");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].slug, "booking");
    }

    #[test]
    fn filter_is_case_insensitive_subsequence() {
        let projects = sample();

        for term in ["o", "SITE", "overview of s", "css", "zzz"] {
            let filtered = filter_projects(&projects, term);
            let needle = term.to_lowercase();

            // every kept record matches
            for project in &filtered {
                assert!(project.matches(&needle), "{term} kept {}", project.slug);
            }

            // every matching record is kept, in canonical order
            let expected: Vec<_> = projects
                .iter()
                .filter(|p| p.matches(&needle))
                .cloned()
                .collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn resolve() {
        let projects = sample();

        assert_eq!(resolve_project(&projects, "school").map(|p| p.id), Some(2));
        assert!(resolve_project(&projects, "nonexistent").is_none());
    }

    #[test]
    fn image_urls() {
        let project = record(1, "Bakery Site", "bakery", &[]);

        assert_eq!(
            project.thumbnail("/projects/web_imgs/").as_deref(),
            Some("/projects/web_imgs/bakery-1.png")
        );
        assert_eq!(
            project.image_url("/projects/web_imgs", 1).as_deref(),
            Some("/projects/web_imgs/bakery-2.png")
        );
        assert!(project.image_url("/projects/web_imgs", 2).is_none());
    }
}
