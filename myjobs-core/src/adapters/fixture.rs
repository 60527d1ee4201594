//! Static catalog fixture
//!
//! Mock companies, jobs, talents, and recommendations for the demo. The data
//! is built once at startup and never mutated; ids are stable so persisted
//! decisions keep pointing at the same records across runs.

use crate::domain::{Company, DayActivity, Job, Recommendation, Talent, UserStats};
use crate::ports::Catalog;

fn fixture_companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "ByteFlow Technologies".to_string(),
            logo: "https://images.pexels.com/photos/3183150/pexels-photo-3183150.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            industry: "FinTech".to_string(),
            location: "Berlin, Germany".to_string(),
            size: "50-200 employees".to_string(),
            description: "Innovative fintech products for digital payments and banking".to_string(),
            website: "https://byteflow-tech.example.com".to_string(),
            culture: vec![
                "Agile".to_string(),
                "Startup mentality".to_string(),
                "Flat hierarchies".to_string(),
            ],
            benefits: vec![
                "Flexible hours".to_string(),
                "Remote friendly".to_string(),
                "Learning budget".to_string(),
                "Team events".to_string(),
            ],
        },
        Company {
            id: 2,
            name: "DataPulse Analytics".to_string(),
            logo: "https://images.pexels.com/photos/159888/pexels-photo-159888.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            industry: "Data Analytics".to_string(),
            location: "Munich, Germany".to_string(),
            size: "200-500 employees".to_string(),
            description: "Leading data analytics platform for enterprise customers".to_string(),
            website: "https://datapulse.example.com".to_string(),
            culture: vec![
                "Innovation".to_string(),
                "Work-life balance".to_string(),
                "Diversity".to_string(),
            ],
            benefits: vec![
                "30 days vacation".to_string(),
                "Home office".to_string(),
                "Health programs".to_string(),
                "Stock options".to_string(),
            ],
        },
        Company {
            id: 3,
            name: "SkyNet Solutions".to_string(),
            logo: "https://images.pexels.com/photos/373543/pexels-photo-373543.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            industry: "Cloud Services".to_string(),
            location: "Hamburg, Germany".to_string(),
            size: "100-200 employees".to_string(),
            description: "Cloud-native software solutions and consulting".to_string(),
            website: "https://skynet-solutions.example.com".to_string(),
            culture: vec![
                "Ownership".to_string(),
                "Continuous learning".to_string(),
                "Open communication".to_string(),
            ],
            benefits: vec![
                "Flexible work models".to_string(),
                "Conference budget".to_string(),
                "Sabbatical option".to_string(),
                "Modern office".to_string(),
            ],
        },
        Company {
            id: 4,
            name: "NeuralMind AI".to_string(),
            logo: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            industry: "Artificial Intelligence".to_string(),
            location: "Frankfurt, Germany".to_string(),
            size: "20-50 employees".to_string(),
            description: "AI-driven solutions for Industry 4.0".to_string(),
            website: "https://neuralmind.example.com".to_string(),
            culture: vec![
                "Research-driven".to_string(),
                "Cutting-edge tech".to_string(),
                "Collaboration".to_string(),
            ],
            benefits: vec![
                "Research budget".to_string(),
                "Conference attendance".to_string(),
                "Publication support".to_string(),
                "Equity".to_string(),
            ],
        },
        Company {
            id: 5,
            name: "EcoVerse Digital".to_string(),
            logo: "https://images.pexels.com/photos/414837/pexels-photo-414837.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            industry: "Sustainability Tech".to_string(),
            location: "Cologne, Germany".to_string(),
            size: "30-100 employees".to_string(),
            description: "Sustainable software solutions for a greener future".to_string(),
            website: "https://ecoverse.example.com".to_string(),
            culture: vec![
                "Purpose-driven".to_string(),
                "Sustainability".to_string(),
                "Impact".to_string(),
            ],
            benefits: vec![
                "Climate-neutral workplace".to_string(),
                "Meaningful projects".to_string(),
                "Bike leasing".to_string(),
                "Green benefits".to_string(),
            ],
        },
    ]
}

fn fixture_jobs() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            company_id: 1,
            title: "Senior React Developer".to_string(),
            company: "ByteFlow Technologies".to_string(),
            logo: "https://images.pexels.com/photos/3183150/pexels-photo-3183150.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            location: "Berlin, Germany".to_string(),
            work_mode: "Hybrid".to_string(),
            salary: "70,000 - 90,000 EUR".to_string(),
            job_type: "Full-time".to_string(),
            level: "Senior".to_string(),
            description: "We are looking for an experienced React developer for our core team.".to_string(),
            requirements: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "REST APIs".to_string(),
                "Git".to_string(),
            ],
            nice_to_have: vec!["GraphQL".to_string(), "Next.js".to_string(), "AWS".to_string()],
            posted: "2 days ago".to_string(),
            applicants: 12,
        },
        Job {
            id: 2,
            company_id: 2,
            title: "Data Engineer".to_string(),
            company: "DataPulse Analytics".to_string(),
            logo: "https://images.pexels.com/photos/159888/pexels-photo-159888.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            location: "Munich, Germany".to_string(),
            work_mode: "Remote".to_string(),
            salary: "75,000 - 95,000 EUR".to_string(),
            job_type: "Full-time".to_string(),
            level: "Mid-Senior".to_string(),
            description: "Shape the future of big data analytics with us.".to_string(),
            requirements: vec![
                "Python".to_string(),
                "SQL".to_string(),
                "Apache Spark".to_string(),
                "ETL".to_string(),
            ],
            nice_to_have: vec!["Airflow".to_string(), "Kafka".to_string(), "Databricks".to_string()],
            posted: "1 week ago".to_string(),
            applicants: 25,
        },
        Job {
            id: 3,
            company_id: 3,
            title: "DevOps Engineer".to_string(),
            company: "SkyNet Solutions".to_string(),
            logo: "https://images.pexels.com/photos/373543/pexels-photo-373543.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            location: "Hamburg, Germany".to_string(),
            work_mode: "Hybrid".to_string(),
            salary: "80,000 - 100,000 EUR".to_string(),
            job_type: "Full-time".to_string(),
            level: "Senior".to_string(),
            description: "Build and operate modern cloud infrastructure.".to_string(),
            requirements: vec![
                "Kubernetes".to_string(),
                "AWS/Azure".to_string(),
                "Terraform".to_string(),
                "CI/CD".to_string(),
            ],
            nice_to_have: vec!["Helm".to_string(), "ArgoCD".to_string(), "Prometheus".to_string()],
            posted: "3 days ago".to_string(),
            applicants: 18,
        },
        Job {
            id: 4,
            company_id: 4,
            title: "Machine Learning Engineer".to_string(),
            company: "NeuralMind AI".to_string(),
            logo: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            location: "Frankfurt, Germany".to_string(),
            work_mode: "Hybrid".to_string(),
            salary: "85,000 - 110,000 EUR".to_string(),
            job_type: "Full-time".to_string(),
            level: "Senior".to_string(),
            description: "Develop AI models for industrial applications.".to_string(),
            requirements: vec![
                "Python".to_string(),
                "TensorFlow/PyTorch".to_string(),
                "MLOps".to_string(),
                "Statistics".to_string(),
            ],
            nice_to_have: vec![
                "Computer Vision".to_string(),
                "NLP".to_string(),
                "Edge AI".to_string(),
            ],
            posted: "5 days ago".to_string(),
            applicants: 8,
        },
        Job {
            id: 5,
            company_id: 5,
            title: "Full-Stack Developer (Green Tech)".to_string(),
            company: "EcoVerse Digital".to_string(),
            logo: "https://images.pexels.com/photos/414837/pexels-photo-414837.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop".to_string(),
            location: "Cologne, Germany".to_string(),
            work_mode: "Remote".to_string(),
            salary: "65,000 - 80,000 EUR".to_string(),
            job_type: "Full-time".to_string(),
            level: "Mid-Level".to_string(),
            description: "Build sustainable software with real impact.".to_string(),
            requirements: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            nice_to_have: vec![
                "TypeScript".to_string(),
                "Docker".to_string(),
                "Green Software Principles".to_string(),
            ],
            posted: "1 day ago".to_string(),
            applicants: 15,
        },
    ]
}

fn fixture_talents() -> Vec<Talent> {
    vec![
        Talent {
            id: 1,
            name: "Sarah Schmidt".to_string(),
            email: "sarah.schmidt@example.com".to_string(),
            role: "Full-Stack Developer".to_string(),
            avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "TypeScript".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ],
            experience: "5 years".to_string(),
            location: "Berlin, Germany".to_string(),
            availability: "Available now".to_string(),
            salary_expectation: "75,000 - 85,000 EUR".to_string(),
            preferred_work_mode: "Hybrid".to_string(),
            bio: "Passionate full-stack developer focused on modern web technologies and cloud-native solutions.".to_string(),
        },
        Talent {
            id: 2,
            name: "Michael Weber".to_string(),
            email: "michael.weber@example.com".to_string(),
            role: "DevOps Engineer".to_string(),
            avatar: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            skills: vec![
                "Kubernetes".to_string(),
                "AWS".to_string(),
                "Terraform".to_string(),
                "CI/CD".to_string(),
                "Python".to_string(),
            ],
            experience: "7 years".to_string(),
            location: "Munich, Germany".to_string(),
            availability: "In 2 months".to_string(),
            salary_expectation: "85,000 - 95,000 EUR".to_string(),
            preferred_work_mode: "Remote".to_string(),
            bio: "DevOps expert with strong automation and infrastructure-as-code experience.".to_string(),
        },
    ]
}

fn fixture_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            job_id: 1,
            match_score: 95,
            reason: "Perfect match for your React & TypeScript skills".to_string(),
            highlights: vec![
                "React expertise".to_string(),
                "TypeScript".to_string(),
                "Berlin location".to_string(),
            ],
        },
        Recommendation {
            job_id: 3,
            match_score: 88,
            reason: "Your cloud experience is an excellent fit".to_string(),
            highlights: vec![
                "DevOps background".to_string(),
                "Kubernetes".to_string(),
                "Hybrid model".to_string(),
            ],
        },
        Recommendation {
            job_id: 5,
            match_score: 82,
            reason: "Strong fit with your full-stack profile".to_string(),
            highlights: vec![
                "Full-stack skills".to_string(),
                "Remote friendly".to_string(),
                "Modern stack".to_string(),
            ],
        },
    ]
}

fn fixture_user_stats() -> UserStats {
    let activity = [
        ("Mon", 15),
        ("Tue", 22),
        ("Wed", 18),
        ("Thu", 25),
        ("Fri", 20),
        ("Sat", 12),
        ("Sun", 15),
    ];

    UserStats {
        profile_views: 127,
        matches: 8,
        applications: 3,
        saved_jobs: 12,
        weekly_activity: activity
            .iter()
            .map(|(day, views)| DayActivity {
                day: day.to_string(),
                views: *views,
            })
            .collect(),
    }
}

/// Catalog adapter serving the built-in fixture
pub struct StaticCatalog {
    companies: Vec<Company>,
    jobs: Vec<Job>,
    talents: Vec<Talent>,
    recommendations: Vec<Recommendation>,
    user_stats: UserStats,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            companies: fixture_companies(),
            jobs: fixture_jobs(),
            talents: fixture_talents(),
            recommendations: fixture_recommendations(),
            user_stats: fixture_user_stats(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StaticCatalog {
    fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    fn talents(&self) -> &[Talent] {
        &self.talents
    }

    fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    fn user_stats(&self) -> &UserStats {
        &self.user_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.companies().len(), 5);
        assert_eq!(catalog.jobs().len(), 5);
        assert_eq!(catalog.talents().len(), 2);
        assert_eq!(catalog.recommendations().len(), 3);
        assert_eq!(catalog.user_stats().weekly_activity.len(), 7);
    }

    #[test]
    fn test_company_ids_are_sequential() {
        let catalog = StaticCatalog::new();
        let ids: Vec<i64> = catalog.companies().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_job_links_to_a_company() {
        let catalog = StaticCatalog::new();
        for job in catalog.jobs() {
            assert!(
                catalog.company_by_id(job.company_id).is_some(),
                "job {} points at missing company {}",
                job.id,
                job.company_id
            );
        }
    }

    #[test]
    fn test_every_recommendation_links_to_a_job() {
        let catalog = StaticCatalog::new();
        for rec in catalog.recommendations() {
            assert!(catalog.job_by_id(rec.job_id).is_some());
        }
    }
}
