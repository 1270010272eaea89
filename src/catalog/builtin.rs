//! Catalog shipped with the binary

use super::item::{Catalog, CatalogItem, FilterDef, ItemDetail};
use crate::constants::FILTER_ALL;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The default showcase, used when no catalog file is configured
pub static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(build);

fn filter(id: &str, label: &str) -> FilterDef {
    FilterDef {
        id: id.to_string(),
        label: label.to_string(),
    }
}

fn item(id: &str, title: &str, short_description: &str, tags: &[&str], categories: &[&str], repo: Option<&str>) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        short_description: short_description.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        categories: categories.iter().map(|category| category.to_string()).collect(),
        link: repo.map(|name| format!("https://github.com/Nehainit/{}", name)),
    }
}

fn detail(description: &str, features: &[&str], technologies: &[&str]) -> ItemDetail {
    ItemDetail {
        description: description.to_string(),
        features: features.iter().map(|feature| feature.to_string()).collect(),
        technologies: technologies.iter().map(|tech| tech.to_string()).collect(),
    }
}

fn build() -> Catalog {
    let filters = vec![
        filter(FILTER_ALL, "All Projects"),
        filter("llm", "LLM/RAG"),
        filter("data", "Data Engineering"),
    ];

    let items = vec![
        item(
            "rag",
            "RAG Criminal Defense Research",
            "Private, locally-hosted RAG system for law firms",
            &["RAG", "LangChain", "Ollama", "Docker"],
            &["llm"],
            Some("RAG_criminal-defense-research"),
        ),
        item(
            "ats",
            "AI-Powered ATS",
            "Intelligent applicant tracking with AI agents",
            &["AI Agents", "Python", "TypeScript"],
            &["llm"],
            Some("AI-powered-ATS"),
        ),
        item(
            "etl",
            "AI-Powered ETL Pipeline",
            "LLM-driven automatic schema detection & mapping",
            &["LLM", "ETL", "FastAPI", "Claude"],
            &["llm", "data"],
            Some("AI-ETL-PIPELINE"),
        ),
        item(
            "dqm",
            "Real-Time Data Quality Monitor",
            "AI-powered anomaly detection & root cause analysis",
            &["Kafka", "Streamlit", "Claude API"],
            &["data"],
            Some("data-quality-monitor"),
        ),
        item(
            "bank",
            "Bank Statement Extractor",
            "AI document extraction with Claude API",
            &["Claude API", "OCR", "Streamlit"],
            &["llm"],
            Some("bank-statment-extractor"),
        ),
        item(
            "report",
            "Automated Report Generator",
            "LLM-powered business intelligence reports",
            &["LangChain", "FastAPI", "Multi-source"],
            &["llm", "data"],
            Some("automated-report-generator"),
        ),
        item(
            "cashflow",
            "Cash Flow Intelligence",
            "Financial analysis workflow built with Langflow",
            &["Langflow", "LLM", "Finance"],
            &["llm"],
            None,
        ),
        item(
            "credit",
            "Credit Risk Assessment",
            "AI-driven credit risk scoring workflow",
            &["Langflow", "Risk Analysis", "AI"],
            &["llm"],
            None,
        ),
    ];

    let mut details = BTreeMap::new();
    details.insert(
        "rag".to_string(),
        detail(
            "A private, locally-hosted Retrieval-Augmented Generation system designed for criminal defense law firms in Illinois. All data stays on the local machine, no cloud services required.",
            &[
                "100% local processing, no cloud dependencies",
                "Document ingestion with OCR support",
                "Semantic search over legal documents",
                "GPU-accelerated inference (RTX 4090 recommended)",
            ],
            &["Python", "Docker", "Ollama", "FastAPI", "Vector DB", "OCR"],
        ),
    );
    details.insert(
        "ats".to_string(),
        detail(
            "An intelligent applicant tracking system with AI agents for resume analysis, candidate matching, and automated screening.",
            &[
                "AI-powered resume parsing and analysis",
                "Intelligent candidate-job matching",
                "Multi-agent architecture for complex workflows",
                "Full-stack application with modern UI",
            ],
            &["Python", "TypeScript", "Streamlit", "AI Agents"],
        ),
    );
    details.insert(
        "etl".to_string(),
        detail(
            "An intelligent system leveraging LLMs to automatically identify data schemas, establish column mappings between different sources, and produce transformation rules.",
            &[
                "Automatic schema detection using LLMs",
                "Intelligent column mapping suggestions",
                "AI-suggested data transformations",
                "Support for CSV, JSON, Excel, and databases",
            ],
            &["Python 3.11+", "Claude/GPT-4", "FastAPI", "Streamlit", "Pandas", "SQLAlchemy"],
        ),
    );
    details.insert(
        "dqm".to_string(),
        detail(
            "A system for monitoring data quality in real time that identifies anomalies, uses AI to explain issues, and distributes alerts via multiple channels.",
            &[
                "7 types of quality checks (null, duplicate, type, range, pattern, freshness, volume)",
                "Statistical anomaly detection (Z-score, distribution analysis)",
                "AI-powered root cause analysis in plain English",
                "Multi-channel alerts (Slack, Email)",
            ],
            &["Python", "Kafka", "Redis", "Streamlit", "Plotly", "Claude/GPT-4"],
        ),
    );
    details.insert(
        "bank".to_string(),
        detail(
            "An AI-powered document extraction system using Claude API to parse unstructured bank statements into structured JSON data with transaction details, account info, and summaries.",
            &[
                "PDF to structured JSON extraction",
                "Intelligent field mapping for multiple bank formats",
                "Transaction categorization and summarization",
                "Export to CSV for further analysis",
            ],
            &["Python", "Claude API", "Streamlit", "Tesseract OCR", "Poppler"],
        ),
    );
    details.insert(
        "report".to_string(),
        detail(
            "An AI-powered system that automatically generates professional business reports from multiple data sources with AI-generated insights.",
            &[
                "Connect to PostgreSQL, MySQL, SQLite, CSV, Google Sheets, REST APIs",
                "AI-generated insights and recommendations",
                "PDF, HTML, Markdown output formats",
                "Automated Slack/Email delivery",
            ],
            &["Python 3.11+", "FastAPI", "LangChain", "Streamlit", "Plotly", "Docker"],
        ),
    );
    details.insert(
        "cashflow".to_string(),
        detail(
            "A financial analysis workflow built with Langflow for intelligent cash flow statement analysis and insights generation.",
            &[
                "Visual workflow builder with Langflow",
                "Automated cash flow analysis",
                "AI-powered financial insights",
                "Easy to customize and extend",
            ],
            &["Langflow", "LLM", "Financial Analysis"],
        ),
    );
    details.insert(
        "credit".to_string(),
        detail(
            "An AI-driven credit risk scoring workflow built with Langflow for automated risk analysis and decision support.",
            &[
                "Visual risk assessment pipeline",
                "AI-powered risk scoring",
                "Configurable risk parameters",
                "Decision support recommendations",
            ],
            &["Langflow", "Risk Modeling", "LLM"],
        ),
    );

    Catalog {
        filters,
        items,
        details,
    }
}
