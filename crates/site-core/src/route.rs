/// Sub-views of the work-with-us page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkSection {
    Employers,
    Candidates,
}

impl WorkSection {
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        match anchor {
            "employers" => Some(WorkSection::Employers),
            "candidates" => Some(WorkSection::Candidates),
            _ => None,
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            WorkSection::Employers => "employers",
            WorkSection::Candidates => "candidates",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    WorkWithUs(Option<WorkSection>),
    GlobalReach,
    ProofInThePeople,
    CandidMoments,
    Contact,
    NotFound,
}

impl Route {
    /// Resolve a location path. The work-with-us sub-views are anchors
    /// (`/work-with-us#employers`); the older `/work-with-us/employers` form
    /// is accepted too. Query strings, other fragments and trailing slashes
    /// are ignored.
    pub fn from_path(path: &str) -> Self {
        let (path, fragment) = path.split_once('#').unwrap_or((path, ""));
        let path = path.split('?').next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["work-with-us"] => Route::WorkWithUs(WorkSection::from_anchor(fragment)),
            ["work-with-us", sub] => match WorkSection::from_anchor(sub) {
                Some(section) => Route::WorkWithUs(Some(section)),
                None => Route::NotFound,
            },
            ["global-reach"] => Route::GlobalReach,
            ["proof-in-the-people"] => Route::ProofInThePeople,
            ["candid-moments"] => Route::CandidMoments,
            ["contact"] => Route::Contact,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::WorkWithUs(None) => "/work-with-us",
            Route::WorkWithUs(Some(WorkSection::Employers)) => "/work-with-us#employers",
            Route::WorkWithUs(Some(WorkSection::Candidates)) => "/work-with-us#candidates",
            Route::GlobalReach => "/global-reach",
            Route::ProofInThePeople => "/proof-in-the-people",
            Route::CandidMoments => "/candid-moments",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    /// Pages whose cards fly away as the user scrolls.
    pub fn has_scroll_cards(&self) -> bool {
        matches!(
            self,
            Route::Home | Route::WorkWithUs(_) | Route::CandidMoments
        )
    }
}
