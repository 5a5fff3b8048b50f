//! Canned data backing the mock backend. Shapes match the live wire
//! format exactly so the rest of the pipeline cannot tell which backend
//! answered.

use crate::domain::{EvaluationResult, JobDescription, Resume, Verdict};

pub fn job_descriptions() -> Vec<JobDescription> {
    vec![
        JobDescription {
            job_id: "job_001".to_string(),
            title: "Senior Backend Engineer".to_string(),
            must_have_skills: vec![
                "Python".to_string(),
                "PostgreSQL".to_string(),
                "REST APIs".to_string(),
                "Docker".to_string(),
            ],
            nice_to_have: vec![
                "Kubernetes".to_string(),
                "GraphQL".to_string(),
                "AWS".to_string(),
            ],
            description: Some(
                "We are looking for a senior backend engineer to own our core \
                 services, from API design through deployment."
                    .to_string(),
            ),
            company: Some("Northwind Labs".to_string()),
            location: Some("Remote (US)".to_string()),
            created_at: Some("2025-06-02T09:30:00Z".to_string()),
        },
        JobDescription {
            job_id: "job_002".to_string(),
            title: "Data Platform Engineer".to_string(),
            must_have_skills: vec![
                "SQL".to_string(),
                "Spark".to_string(),
                "Airflow".to_string(),
            ],
            nice_to_have: vec!["dbt".to_string(), "Terraform".to_string()],
            description: None,
            company: Some("Northwind Labs".to_string()),
            location: Some("Austin, TX".to_string()),
            created_at: Some("2025-06-10T14:00:00Z".to_string()),
        },
    ]
}

pub fn resumes() -> Vec<Resume> {
    let entries: [(&str, &str, &str, Option<&str>, Option<&str>, &str); 8] = [
        (
            "resume_001",
            "Sarah Chen",
            "sarah_chen_resume.pdf",
            Some("sarah.chen@example.com"),
            Some("+1-415-555-0132"),
            "Backend engineer with 7 years building Python services on \
             PostgreSQL. Led migration to containerized deployments...",
        ),
        (
            "resume_002",
            "Marcus Johnson",
            "mjohnson_cv.docx",
            Some("marcus.j@example.com"),
            Some("+1-206-555-0177"),
            "Full-stack developer, 5 years. Django and React; owns CI \
             pipelines and REST API design for a B2B product...",
        ),
        (
            "resume_003",
            "Priya Patel",
            "priya_patel.pdf",
            Some("priya.patel@example.com"),
            None,
            "Data engineer turned backend developer. Strong SQL, Spark \
             batch jobs, and service instrumentation...",
        ),
        (
            "resume_004",
            "Diego Alvarez",
            "diego-alvarez-resume.pdf",
            Some("diego.alvarez@example.com"),
            Some("+34-612-555-043"),
            "Systems programmer with Go and Rust exposure; built internal \
             tooling for deployment orchestration...",
        ),
        (
            "resume_005",
            "Emily Nakamura",
            "enakamura.doc",
            Some("emily.nakamura@example.com"),
            None,
            "Junior developer, 2 years. Flask APIs, unit testing, and \
             some Docker. Eager to grow into platform work...",
        ),
        (
            "resume_006",
            "Tom Okafor",
            "tom_okafor_resume.pdf",
            None,
            Some("+44-20-555-0101"),
            "Frontend-leaning engineer moving toward the backend. \
             TypeScript, Node services, basic SQL...",
        ),
        (
            "resume_007",
            "Lena Fischer",
            "lena_fischer.pdf",
            Some("lena.fischer@example.com"),
            None,
            "Platform engineer. Kubernetes operators, Terraform modules, \
             and a Python service mesh control plane...",
        ),
        (
            "resume_008",
            "Ahmed Hassan",
            "ahassan_cv.pdf",
            Some("ahmed.hassan@example.com"),
            Some("+20-100-555-0009"),
            "Database specialist: query tuning, replication, and schema \
             design for high-write PostgreSQL clusters...",
        ),
    ];

    entries
        .into_iter()
        .map(
            |(resume_id, name, filename, email, phone, snippet)| Resume {
                resume_id: resume_id.to_string(),
                name: name.to_string(),
                filename: filename.to_string(),
                parsed_text_snippet: snippet.to_string(),
                email: email.map(str::to_string),
                phone: phone.map(str::to_string),
                uploaded_at: None,
            },
        )
        .collect()
}

pub fn evaluation_results() -> Vec<EvaluationResult> {
    let resumes = resumes();
    let by_id = |id: &str| {
        resumes
            .iter()
            .find(|resume| resume.resume_id == id)
            .cloned()
            .unwrap_or_else(|| panic!("fixture resume '{id}' missing"))
    };

    let entries: [(&str, i32, Verdict, &[&str], &[&str], &str); 8] = [
        (
            "resume_001",
            92,
            Verdict::High,
            &["Python", "PostgreSQL", "REST APIs", "Docker"],
            &["Kubernetes"],
            "Excellent match. Seven years of directly relevant backend work \
             with every must-have skill in production use; the container \
             migration experience maps onto the deployment ownership this \
             role carries.",
        ),
        (
            "resume_002",
            78,
            Verdict::High,
            &["Python", "REST APIs", "Docker"],
            &["PostgreSQL"],
            "Strong candidate. Django and CI ownership cover most of the \
             role; database depth is the one open question worth probing in \
             a screen.",
        ),
        (
            "resume_003",
            71,
            Verdict::Medium,
            &["PostgreSQL", "REST APIs"],
            &["Docker", "Python"],
            "Solid data foundation and instrumentation habits, but the \
             service-side Python experience is recent and containerization \
             exposure is limited.",
        ),
        (
            "resume_004",
            64,
            Verdict::Medium,
            &["Docker", "REST APIs"],
            &["Python", "PostgreSQL"],
            "Capable systems programmer whose primary languages are Go and \
             Rust; would ramp on the Python stack rather than arrive \
             productive.",
        ),
        (
            "resume_005",
            55,
            Verdict::Medium,
            &["Python"],
            &["PostgreSQL", "REST APIs", "Docker"],
            "Promising junior profile. Flask work shows the right \
             instincts, but the role expects independent ownership beyond \
             current experience.",
        ),
        (
            "resume_006",
            41,
            Verdict::Low,
            &["REST APIs"],
            &["Python", "PostgreSQL", "Docker"],
            "Primarily frontend history; backend exposure is limited to \
             Node services and basic SQL, well short of the must-have \
             list.",
        ),
        (
            "resume_007",
            68,
            Verdict::Medium,
            &["Python", "Docker"],
            &["PostgreSQL", "REST APIs"],
            "Infrastructure-heavy background with adjacent skills; API \
             design experience is thinner than the role needs but the \
             platform depth is a real asset.",
        ),
        (
            "resume_008",
            47,
            Verdict::Low,
            &["PostgreSQL"],
            &["Python", "REST APIs", "Docker"],
            "Deep database specialist rather than a service engineer; a \
             better fit for a dedicated data infrastructure opening.",
        ),
    ];

    entries
        .into_iter()
        .map(|(resume_id, score, verdict, matched, missing, feedback)| {
            let resume = by_id(resume_id);
            EvaluationResult {
                resume_id: resume.resume_id,
                name: resume.name,
                score,
                verdict,
                matched_skills: matched.iter().map(|s| s.to_string()).collect(),
                missing_skills: missing.iter().map(|s| s.to_string()).collect(),
                feedback: feedback.to_string(),
                email: resume.email,
                phone: resume.phone,
            }
        })
        .collect()
}
