use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DataConfig;

// project categories
//
// each category is backed by its own static document and image directory; no record
// appears in more than one of them
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Web,
    Graphics,
}

impl Category {
    pub fn all() -> [Self; 2] {
        [Self::Web, Self::Graphics]
    }

    // anything we do not recognize, including an absent parameter, is the web category
    pub fn from_query(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "graphics" => Self::Graphics,
            _ => Self::Web,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Graphics => "graphics",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::Graphics => "Graphic Design",
        }
    }

    pub fn data_url(self, data: &DataConfig) -> &str {
        match self {
            Self::Web => &data.web,
            Self::Graphics => &data.graphics,
        }
    }

    pub fn image_dir(self, data: &DataConfig) -> &str {
        match self {
            Self::Web => &data.web_images,
            Self::Graphics => &data.graphics_images,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CategoryTarget {
    Projects(Category),
    ComingSoon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub target: CategoryTarget,
}

pub const CATEGORY_CARDS: [CategoryCard; 4] = [
    CategoryCard {
        title: "Web Development",
        description: "Responsive sites and web applications, from landing pages to dashboards.",
        image: "/images/categories/web.jpg",
        target: CategoryTarget::Projects(Category::Web),
    },
    CategoryCard {
        title: "Graphic Design",
        description: "Brand identities, posters, and social media artwork.",
        image: "/images/categories/graphics.jpg",
        target: CategoryTarget::Projects(Category::Graphics),
    },
    CategoryCard {
        title: "Motion Design",
        description: "Animated explainers and title sequences.",
        image: "/images/categories/motion.jpg",
        target: CategoryTarget::ComingSoon,
    },
    CategoryCard {
        title: "Photography",
        description: "Product and portrait photography.",
        image: "/images/categories/photography.jpg",
        target: CategoryTarget::ComingSoon,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: [NavigationItem; 4] = [
    NavigationItem {
        name: "Home",
        href: "/",
    },
    NavigationItem {
        name: "Work",
        href: "/work",
    },
    NavigationItem {
        name: "About",
        href: "/about",
    },
    NavigationItem {
        name: "Contact",
        href: "/contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_to_web() {
        assert_eq!(Category::from_query("graphics"), Category::Graphics);
        assert_eq!(Category::from_query(" Graphics "), Category::Graphics);
        assert_eq!(Category::from_query("web"), Category::Web);
        assert_eq!(Category::from_query(""), Category::Web);
        assert_eq!(Category::from_query("photography"), Category::Web);
    }

    #[test]
    fn lookup_table() {
        let data = DataConfig::default();

        assert_eq!(Category::Web.data_url(&data), "/projects/web_projects_api.json");
        assert_eq!(Category::Graphics.data_url(&data), "/projects/graphics_projects_api.json");
        assert_eq!(Category::Graphics.image_dir(&data), "/projects/gd_imgs");
    }

    #[test]
    fn two_cards_have_data() {
        let real: Vec<_> = CATEGORY_CARDS
            .iter()
            .filter_map(|card| match card.target {
                CategoryTarget::Projects(category) => Some(category),
                CategoryTarget::ComingSoon => None,
            })
            .collect();

        assert_eq!(real, Category::all().to_vec());
    }
}
