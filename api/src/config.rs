use serde::{Deserialize, Serialize};

// site configuration
//
// this struct contains the handful of values that differ between deployments of the site:
// who it belongs to, how to reach them, and where the static data documents are served
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub socials: Vec<SocialLink>,
    pub data: DataConfig,

    // local storage keys are written as {storage_prefix}_{key}
    pub storage_prefix: String,
    pub theme_key: String,

    // how long the "copied" label stays up after a clipboard write
    pub copy_feedback_ms: u32,
}

// resource locators for each category
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DataConfig {
    pub web: String,
    pub graphics: String,
    pub web_images: String,
    pub graphics_images: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            owner: String::from("Carlos Shava"),
            tagline: String::from("Web developer and graphic designer"),
            email: String::from("shavacarlos1@gmail.com"),
            phone: String::from("+263 77 000 0000"),
            socials: vec![
                SocialLink {
                    name: String::from("GitHub"),
                    href: String::from("https://github.com/"),
                },
                SocialLink {
                    name: String::from("LinkedIn"),
                    href: String::from("https://www.linkedin.com/"),
                },
            ],
            data: DataConfig::default(),
            storage_prefix: String::from("portfolio"),
            theme_key: String::from("theme"),
            copy_feedback_ms: 2000,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            web: String::from("/projects/web_projects_api.json"),
            graphics: String::from("/projects/graphics_projects_api.json"),
            web_images: String::from("/projects/web_imgs"),
            graphics_images: String::from("/projects/gd_imgs"),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

impl SiteConfig {
    pub fn from_toml(doc: &str) -> anyhow::Result<SiteConfig> {
        let file: TomlConfigFile = toml::from_str(doc)?;

        Ok(file.config)
    }

    pub fn storage_key(&self, key: &str) -> String {
        format!("{}_{}", self.storage_prefix, key)
    }

    // messaging deep link, which only accepts the digits of the number
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();

        format!("https://wa.me/{digits}")
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn share_link(&self, page_url: &str) -> String {
        format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            urlencoding::encode(&format!("Check out {}'s portfolio", self.owner)),
            urlencoding::encode(page_url)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let doc = r#"
            [config]
            owner = "Someone Else"
            copy_feedback_ms = 500

            [config.data]
            web = "/data/web.json"
        "#;

        let config = SiteConfig::from_toml(doc).unwrap();

        assert_eq!(config.owner, "Someone Else");
        assert_eq!(config.copy_feedback_ms, 500);
        assert_eq!(config.data.web, "/data/web.json");
        assert_eq!(config.data.graphics, "/projects/graphics_projects_api.json");
        assert_eq!(config.data.graphics_images, "/projects/gd_imgs");
        assert_eq!(config.email, "shavacarlos1@gmail.com");
    }

    #[test]
    fn missing_config_table_is_an_error() {
        assert!(SiteConfig::from_toml("owner = \"nobody\"").is_err());
    }

    #[test]
    fn links() {
        let config = SiteConfig {
            phone: String::from("+1 (555) 010-2000"),
            ..SiteConfig::default()
        };

        assert_eq!(config.whatsapp_link(), "https://wa.me/15550102000");
        assert_eq!(config.mailto_link(), "mailto:shavacarlos1@gmail.com");
        assert_eq!(config.storage_key("theme"), "portfolio_theme");

        let share = config.share_link("https://example.com/work");
        assert!(share.ends_with("url=https%3A%2F%2Fexample.com%2Fwork"));
        assert!(share.contains("text=Check%20out%20Carlos%20Shava%27s%20portfolio"));

        let shared_query = config.share_link("https://example.com/projects?category=web&x=a b");
        assert!(shared_query.ends_with(
            "url=https%3A%2F%2Fexample.com%2Fprojects%3Fcategory%3Dweb%26x%3Da%20b"
        ));
    }
}
