// Criterion benchmarks for Career Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use career_match::core::{extract_skills, parse_resume, Matcher, RankOptions};
use career_match::models::{EducationLevel, JobPosting, JobStatus};

const RESUME: &str = "Full stack engineer with 6 years of experience building React, \
    TypeScript and Node.js applications. Deployed microservices on AWS with Docker and \
    Kubernetes, CI/CD through Jenkins and GitHub Actions. PostgreSQL, Redis, GraphQL. \
    B.Tech in Computer Science, agile teams, mentoring.";

const SKILL_POOL: &[&str] = &[
    "React", "JavaScript", "Node.js", "MongoDB", "Docker", "Figma", "Python", "SQL",
    "AWS", "Kubernetes", "Terraform", "Vue.js", "CSS", "Selenium", "Azure", "Redis",
];

fn create_job(id: usize) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: format!("Job {}", id),
        company: "Acme".to_string(),
        location: "Bangalore".to_string(),
        salary_min: Some(1_000_000.0),
        salary_max: Some(2_000_000.0),
        skills: (0..5)
            .map(|k| SKILL_POOL[(id * 7 + k * 3) % SKILL_POOL.len()].to_string())
            .collect(),
        experience: Some(format!("{}+ years", id % 8)),
        education_level: Some(EducationLevel::SCALE[id % EducationLevel::SCALE.len()]),
        status: JobStatus::Active,
    }
}

fn bench_extract_skills(c: &mut Criterion) {
    c.bench_function("extract_skills", |b| {
        b.iter(|| extract_skills(black_box(RESUME)));
    });
}

fn bench_parse_resume(c: &mut Criterion) {
    c.bench_function("parse_resume", |b| {
        b.iter(|| parse_resume(black_box(RESUME)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile = parse_resume(RESUME);

    let mut group = c.benchmark_group("ranking");

    for job_count in [10, 50, 100, 500, 1000].iter() {
        let jobs: Vec<JobPosting> = (0..*job_count).map(create_job).collect();

        group.bench_with_input(BenchmarkId::new("rank", job_count), job_count, |b, _| {
            b.iter(|| {
                matcher.rank(
                    black_box(&profile),
                    black_box(jobs.clone()),
                    black_box(&RankOptions::top(10)),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract_skills, bench_parse_resume, bench_ranking);

criterion_main!(benches);
