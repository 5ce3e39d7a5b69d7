//! Controlled vocabularies shared by job scoring and resume analysis.

/// Known technical skills. Matching is a lowercase substring test, so every
/// entry must already be lowercase.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "javascript",
    "java",
    "react",
    "node.js",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "html",
    "css",
    "mongodb",
    "postgresql",
    "redis",
    "machine learning",
    "data science",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "angular",
    "vue.js",
    "typescript",
    "go",
    "rust",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "flutter",
    "django",
    "flask",
    "spring",
    "express",
    "fastapi",
    "graphql",
    "rest api",
];

/// Company-name fragments that earn the flat reputation bonus.
pub const REPUTABLE_COMPANIES: &[&str] = &[
    "google",
    "microsoft",
    "amazon",
    "apple",
    "meta",
    "netflix",
    "uber",
    "airbnb",
];
