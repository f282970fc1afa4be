/// One selectable major: menu key, URL slug, display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Major {
    pub key: &'static str,
    pub slug: &'static str,
    pub display: &'static str,
}

/// The fixed menu of searchable majors. Keys are the digits the prompt accepts.
pub const MAJORS: &[Major] = &[
    Major { key: "1", slug: "economics", display: "Economics" },
    Major { key: "2", slug: "computer-science", display: "Computer Science" },
    Major { key: "3", slug: "business", display: "Business" },
    Major { key: "4", slug: "engineering", display: "Engineering" },
    Major { key: "5", slug: "biology-pre-med", display: "Biology / Pre-Med" },
    Major { key: "6", slug: "math", display: "Mathematics" },
    Major { key: "7", slug: "english-literature", display: "English / Literature" },
    Major { key: "8", slug: "political-science", display: "Political Science" },
    Major { key: "9", slug: "chemistry", display: "Chemistry" },
    Major { key: "10", slug: "physics", display: "Physics" },
    Major { key: "11", slug: "history", display: "History" },
    Major { key: "12", slug: "psychology", display: "Psychology" },
];

pub fn find(choice: &str) -> Option<&'static Major> {
    MAJORS.iter().find(|m| m.key == choice)
}

/// Lookup by slug, for `--major computer-science` style invocation.
pub fn find_slug(slug: &str) -> Option<&'static Major> {
    MAJORS.iter().find(|m| m.slug == slug)
}
