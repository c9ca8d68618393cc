// page content for the home and about pages
//
// the home hero cycles through the roles below, each paired with its own background, and
// the about page walks through the journey steps in order

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroRole {
    pub title: &'static str,
    pub background: &'static str,
}

pub const HERO_ROLES: [HeroRole; 4] = [
    HeroRole {
        title: "Graphics Designer",
        background: "/backgrounds/graphics.jpg",
    },
    HeroRole {
        title: "IT Specialist",
        background: "/backgrounds/it.jpg",
    },
    HeroRole {
        title: "Video Editor",
        background: "/backgrounds/video.jpg",
    },
    HeroRole {
        title: "Digital Marketing Specialist",
        background: "/backgrounds/marketing.jpg",
    },
];

pub const ROLE_INTERVAL_MS: u32 = 3500;

// the index after `index` in a cycle of `len` entries; an empty cycle stays at 0
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

pub fn hero_backgrounds() -> Vec<String> {
    HERO_ROLES
        .iter()
        .map(|role| role.background.to_owned())
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JourneyStep {
    pub year: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub icon: &'static str,
}

pub const JOURNEY: [JourneyStep; 6] = [
    JourneyStep {
        year: "Early Days",
        title: "The Curious Coder",
        content: "It started with curiosity and a laptop. I spent my early years building small web \
                  apps for the fun of watching an idea turn into something that worked, and each \
                  one taught me a little more about what happens behind the screen.",
        icon: "💻",
    },
    JourneyStep {
        year: "2019",
        title: "The Academic Path",
        content: "That curiosity turned into a direction. I enrolled in Computer Science to learn \
                  the principles underneath the tools, and every course filled in another part \
                  of the picture.",
        icon: "📚",
    },
    JourneyStep {
        year: "2022",
        title: "The Design Discovery",
        content: "An internship put graphic design in front of me and it stuck. Evenings went to \
                  tutorials and practice pieces, and design became a second way to work through \
                  an idea.",
        icon: "🎨",
    },
    JourneyStep {
        year: "2024-2025",
        title: "The Visual Storyteller",
        content: "Design led to video. Short edits grew into full-length documentaries, each one \
                  harder than the last, and the work shifted from building things to telling \
                  stories with them.",
        icon: "🎬",
    },
    JourneyStep {
        year: "Early 2025",
        title: "The Marketing Explorer",
        content: "With a growing body of designs and videos, the next question was who would see \
                  them. That question pulled me into digital marketing, where I am learning to \
                  put good work in front of the right people.",
        icon: "🎯",
    },
    JourneyStep {
        year: "May 2025",
        title: "The Milestone",
        content: "Finishing my Computer Science degree took longer and cost more than the \
                  transcript shows. It tested my patience and my resolve, and it showed me how \
                  much further I can go.",
        icon: "🎓",
    },
];

// the about page highlights one step at a time; the first is highlighted until the
// pointer lands on another
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JourneyHighlight {
    active: usize,
}

impl JourneyHighlight {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    // indexes past the end of the journey are ignored
    pub fn hover(&mut self, index: usize) {
        if index < JOURNEY.len() {
            self.active = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_cycle_in_order() {
        let len = HERO_ROLES.len();
        let mut index = 0;
        let mut seen = Vec::new();

        for _ in 0..len {
            seen.push(HERO_ROLES[index].title);
            index = next_index(index, len);
        }

        assert_eq!(
            seen,
            vec![
                "Graphics Designer",
                "IT Specialist",
                "Video Editor",
                "Digital Marketing Specialist"
            ]
        );
        // wrapped back to the first role
        assert_eq!(index, 0);
    }

    #[test]
    fn empty_cycle_stays_put() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(next_index(5, 0), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn every_role_has_its_own_background() {
        let backgrounds = hero_backgrounds();

        assert_eq!(backgrounds.len(), HERO_ROLES.len());
        for (i, background) in backgrounds.iter().enumerate() {
            assert!(!backgrounds[..i].contains(background), "{background} repeated");
        }
    }

    #[test]
    fn journey_highlight_follows_hover() {
        let mut highlight = JourneyHighlight::default();

        assert_eq!(JOURNEY.len(), 6);
        assert!(highlight.is_active(0));

        highlight.hover(3);
        assert_eq!(highlight.active(), 3);
        assert!(!highlight.is_active(0));

        highlight.hover(JOURNEY.len());
        assert_eq!(highlight.active(), 3);
    }
}
