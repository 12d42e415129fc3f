mod component;
pub use component::*;

use serde::{Deserialize, Serialize};

/// Named viewport-size buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Lookup order for responsive values, widest first.
pub const RESPONSIVE_ORDER: &[Breakpoint] = &[
    Breakpoint::Xxl,
    Breakpoint::Xl,
    Breakpoint::Lg,
    Breakpoint::Md,
    Breakpoint::Sm,
    Breakpoint::Xs,
];

impl Breakpoint {
    /// Minimum viewport width in pixels at which this breakpoint applies.
    pub fn min_width(&self) -> f64 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 576.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 992.0,
            Breakpoint::Xl => 1200.0,
            Breakpoint::Xxl => 1600.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }
}

/// Which breakpoints currently match the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenMap {
    pub xs: bool,
    pub sm: bool,
    pub md: bool,
    pub lg: bool,
    pub xl: bool,
    pub xxl: bool,
}

impl ScreenMap {
    /// Screens for a viewport `width` pixels wide.
    ///
    /// `xs` only matches below `sm`; the rest match from their minimum width up.
    pub fn from_width(width: f64) -> Self {
        Self {
            xs: width < Breakpoint::Sm.min_width(),
            sm: width >= Breakpoint::Sm.min_width(),
            md: width >= Breakpoint::Md.min_width(),
            lg: width >= Breakpoint::Lg.min_width(),
            xl: width >= Breakpoint::Xl.min_width(),
            xxl: width >= Breakpoint::Xxl.min_width(),
        }
    }

    /// A map where only `breakpoint` is active.
    pub fn only(breakpoint: Breakpoint) -> Self {
        let mut screens = Self::default();
        screens.set(breakpoint, true);
        screens
    }

    pub fn is_active(&self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    pub fn set(&mut self, breakpoint: Breakpoint, active: bool) {
        match breakpoint {
            Breakpoint::Xs => self.xs = active,
            Breakpoint::Sm => self.sm = active,
            Breakpoint::Md => self.md = active,
            Breakpoint::Lg => self.lg = active,
            Breakpoint::Xl => self.xl = active,
            Breakpoint::Xxl => self.xxl = active,
        }
    }
}

/// Pixel sizes keyed by breakpoint. Unset breakpoints are skipped during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveSize {
    pub xs: Option<u32>,
    pub sm: Option<u32>,
    pub md: Option<u32>,
    pub lg: Option<u32>,
    pub xl: Option<u32>,
    pub xxl: Option<u32>,
}

impl ResponsiveSize {
    pub fn get(&self, breakpoint: Breakpoint) -> Option<u32> {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }
}

/// Size for the widest active breakpoint that has a value.
pub fn resolve_responsive(sizes: &ResponsiveSize, screens: &ScreenMap) -> Option<u32> {
    RESPONSIVE_ORDER
        .iter()
        .filter(|bp| screens.is_active(**bp))
        .find_map(|bp| sizes.get(*bp))
}
