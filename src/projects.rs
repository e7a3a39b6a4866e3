use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

/// The static project list, in the order it is shown on the site.
pub fn catalog() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Personal Portfolio".into(),
            description: "Personal website built using React + Vite with a Rust backend.".into(),
            tech: vec!["React".into(), "Vite".into(), "Rust".into(), "Axum".into()],
        },
        Project {
            id: 2,
            title: "DSA Practice".into(),
            description: "Solved DSA problems across LeetCode and Codeforces.".into(),
            tech: vec!["C++".into(), "STL".into(), "Algorithms".into()],
        },
        Project {
            id: 3,
            title: "Mini Projects".into(),
            description: "Small frontend and backend experiments for learning.".into(),
            tech: vec!["JavaScript".into(), "CSS".into(), "APIs".into()],
        },
    ]
}
