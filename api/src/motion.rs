// animation presets for page transitions
//
// these are plain data; the webapp renders them into css keyframes once at startup

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    // translation in pixels
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Frame {
    pub const REST: Frame = Frame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub initial: Frame,
    pub animate: Frame,
    pub exit: Frame,
    pub duration_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Fade,
    SlideUp,
    SlideRight,
    Scale,
}

impl Preset {
    pub fn all() -> [Self; 4] {
        [Self::Fade, Self::SlideUp, Self::SlideRight, Self::Scale]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::SlideUp => "slide-up",
            Self::SlideRight => "slide-right",
            Self::Scale => "scale",
        }
    }

    pub fn variants(self) -> Variants {
        let hidden = Frame {
            opacity: 0.0,
            ..Frame::REST
        };

        match self {
            Self::Fade => Variants {
                initial: hidden,
                animate: Frame::REST,
                exit: hidden,
                duration_ms: 300,
            },
            Self::SlideUp => Variants {
                initial: Frame { y: 20.0, ..hidden },
                animate: Frame::REST,
                exit: Frame { y: -20.0, ..hidden },
                duration_ms: 400,
            },
            Self::SlideRight => Variants {
                initial: Frame { x: -40.0, ..hidden },
                animate: Frame::REST,
                exit: Frame { x: 40.0, ..hidden },
                duration_ms: 400,
            },
            Self::Scale => Variants {
                initial: Frame {
                    scale: 0.95,
                    ..hidden
                },
                animate: Frame::REST,
                exit: Frame {
                    scale: 1.05,
                    ..hidden
                },
                duration_ms: 350,
            },
        }
    }

    pub fn enter_class(self) -> String {
        format!("motion-{}-enter", self.name())
    }

    pub fn exit_class(self) -> String {
        format!("motion-{}-exit", self.name())
    }

    // keyframes plus the two classes that run them
    pub fn keyframes_css(self) -> String {
        let v = self.variants();
        let name = self.name();

        format!(
            "@keyframes {name}-in {{ from {{ {} }} to {{ {} }} }}\n\
             @keyframes {name}-out {{ from {{ {} }} to {{ {} }} }}\n\
             .{} {{ animation: {name}-in {}ms ease-out both; }}\n\
             .{} {{ animation: {name}-out {}ms ease-in both; }}\n",
            v.initial.css(),
            v.animate.css(),
            v.animate.css(),
            v.exit.css(),
            self.enter_class(),
            v.duration_ms,
            self.exit_class(),
            v.duration_ms,
        )
    }
}

pub fn all_keyframes_css() -> String {
    Preset::all().iter().map(|p| p.keyframes_css()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_ends_at_rest() {
        for preset in Preset::all() {
            let v = preset.variants();

            assert_eq!(v.animate, Frame::REST);
            assert_eq!(v.initial.opacity, 0.0);
            assert_eq!(v.exit.opacity, 0.0);
            assert!(v.duration_ms > 0);
        }
    }

    #[test]
    fn css_names_both_directions() {
        let css = Preset::SlideUp.keyframes_css();

        assert!(css.contains("@keyframes slide-up-in"));
        assert!(css.contains("@keyframes slide-up-out"));
        assert!(css.contains(".motion-slide-up-enter { animation: slide-up-in 400ms"));
        assert!(css.contains("translate(0px, 20px)"));
    }
}
