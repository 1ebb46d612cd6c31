use std::fmt;

use crate::catalog::FacetSpec;

/// One of the three browsable marketplace catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Prompts,
    Tools,
    Agents,
}

impl ResourceKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prompt" | "prompts" => Some(Self::Prompts),
            "tool" | "tools" => Some(Self::Tools),
            "agent" | "agents" => Some(Self::Agents),
            _ => None,
        }
    }

    /// URL path segment for this catalog's endpoints.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Prompts => "prompts",
            Self::Tools => "tools",
            Self::Agents => "agents",
        }
    }

    /// Human-readable label for display.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Prompts => "Prompts",
            Self::Tools => "Tools",
            Self::Agents => "Agents",
        }
    }

    /// All kinds in display order.
    pub fn all() -> [ResourceKind; 3] {
        [Self::Prompts, Self::Tools, Self::Agents]
    }

    /// The facet dimensions this catalog can be narrowed by, in sidebar
    /// order. Each spec ties a group title to the key it is read from in
    /// the filters payload and the query parameter it is transmitted as.
    pub fn facet_specs(&self) -> &'static [FacetSpec] {
        match self {
            Self::Prompts => PROMPT_FACETS,
            Self::Tools => TOOL_FACETS,
            Self::Agents => AGENT_FACETS,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

const PROMPT_FACETS: &[FacetSpec] = &[
    FacetSpec {
        title: "Category",
        response_key: "categories",
        param: "category",
    },
    FacetSpec {
        title: "Use Case",
        response_key: "use_cases",
        param: "tag",
    },
    FacetSpec {
        title: "Model",
        response_key: "models",
        param: "model",
    },
];

const TOOL_FACETS: &[FacetSpec] = &[
    FacetSpec {
        title: "Language",
        response_key: "languages",
        param: "language",
    },
    FacetSpec {
        title: "Use Case",
        response_key: "use_cases",
        param: "tag",
    },
    FacetSpec {
        title: "Model",
        response_key: "models",
        param: "model",
    },
];

const AGENT_FACETS: &[FacetSpec] = &[
    FacetSpec {
        title: "Category",
        response_key: "tags",
        param: "tag",
    },
    FacetSpec {
        title: "Tools Used",
        response_key: "tools",
        param: "tools",
    },
    FacetSpec {
        title: "Model",
        response_key: "models",
        param: "model",
    },
];
