/// Service sub-pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTopic {
    FullScope,
    Partial,
    Regulatory,
    Expertise,
}

/// Case-study sub-pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStudy {
    Dtx,
    AiSamd,
    IvdQualitative,
    IvdQuantitative,
    MedSupplies,
}

/// Insight article sub-pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightTopic {
    SampleSize,
    AiSamd,
    Dtx,
    Ivd,
}

/// The site's navigable routes. Anything else redirects home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Service(ServiceTopic),
    Cases,
    Case(CaseStudy),
    Insights,
    Insight(InsightTopic),
    Contact,
}

impl Route {
    /// Parse a fragment path such as `/cases/dtx`. A query suffix is
    /// ignored. Returns `None` for unknown paths.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split('?').next().unwrap_or(path);
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let route = match (segments.next(), segments.next(), segments.next()) {
            (None, ..) => Route::Home,
            (Some("about"), None, _) => Route::About,
            (Some("contact"), None, _) => Route::Contact,
            (Some("services"), None, _) => Route::Services,
            (Some("services"), Some(topic), None) => Route::Service(match topic {
                "full-scope" => ServiceTopic::FullScope,
                "partial" => ServiceTopic::Partial,
                "regulatory" => ServiceTopic::Regulatory,
                "expertise" => ServiceTopic::Expertise,
                _ => return None,
            }),
            (Some("cases"), None, _) => Route::Cases,
            (Some("cases"), Some(case), None) => Route::Case(match case {
                "dtx" => CaseStudy::Dtx,
                "ai-samd" => CaseStudy::AiSamd,
                "ivd-qual" => CaseStudy::IvdQualitative,
                "ivd-quant" => CaseStudy::IvdQuantitative,
                "med-supplies" => CaseStudy::MedSupplies,
                _ => return None,
            }),
            (Some("insights"), None, _) => Route::Insights,
            (Some("insights"), Some(topic), None) => Route::Insight(match topic {
                "samplesize" => InsightTopic::SampleSize,
                "ai-samd" => InsightTopic::AiSamd,
                "dtx" => InsightTopic::Dtx,
                "ivd" => InsightTopic::Ivd,
                _ => return None,
            }),
            _ => return None,
        };
        Some(route)
    }

    /// Canonical fragment path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Services => "/services",
            Route::Service(ServiceTopic::FullScope) => "/services/full-scope",
            Route::Service(ServiceTopic::Partial) => "/services/partial",
            Route::Service(ServiceTopic::Regulatory) => "/services/regulatory",
            Route::Service(ServiceTopic::Expertise) => "/services/expertise",
            Route::Cases => "/cases",
            Route::Case(CaseStudy::Dtx) => "/cases/dtx",
            Route::Case(CaseStudy::AiSamd) => "/cases/ai-samd",
            Route::Case(CaseStudy::IvdQualitative) => "/cases/ivd-qual",
            Route::Case(CaseStudy::IvdQuantitative) => "/cases/ivd-quant",
            Route::Case(CaseStudy::MedSupplies) => "/cases/med-supplies",
            Route::Insights => "/insights",
            Route::Insight(InsightTopic::SampleSize) => "/insights/samplesize",
            Route::Insight(InsightTopic::AiSamd) => "/insights/ai-samd",
            Route::Insight(InsightTopic::Dtx) => "/insights/dtx",
            Route::Insight(InsightTopic::Ivd) => "/insights/ivd",
        }
    }
}
