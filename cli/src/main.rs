mod report;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use job_scraper::{
    headhunter::HeadHunter, pipeline::collect_salary_stats, superjob::SuperJob, Config,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Optional: restrict the report to these job sites. Runs with no arguments
    /// query every site.
    #[clap(long, value_enum)]
    site: Vec<Site>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Site {
    Headhunter,
    Superjob,
}

impl Site {
    fn title(&self) -> &'static str {
        match self {
            Site::Headhunter => "HeadHunter Moscow",
            Site::Superjob => "SuperJob Moscow",
        }
    }
}

const PROGRAMMING_LANGUAGES: [&str; 10] = [
    "javascript",
    "java",
    "python",
    "ruby",
    "php",
    "c++",
    "css",
    "c#",
    "c",
    "go",
];

/// Collect every requested site before rendering anything, so a failure leaves no partial report.
async fn run(sites: &[Site]) -> job_scraper::Result<Vec<String>> {
    let mut superjob_stats = None;
    if sites.contains(&Site::Superjob) {
        let superjob = SuperJob::new(Config::from_env());
        superjob_stats = Some(collect_salary_stats(&superjob, &PROGRAMMING_LANGUAGES).await?);
    }
    let mut headhunter_stats = None;
    if sites.contains(&Site::Headhunter) {
        let headhunter = HeadHunter::new()?;
        headhunter_stats = Some(collect_salary_stats(&headhunter, &PROGRAMMING_LANGUAGES).await?);
    }

    let tables = [
        (Site::Headhunter, headhunter_stats),
        (Site::Superjob, superjob_stats),
    ]
    .into_iter()
    .filter_map(|(site, stats)| {
        stats.map(|stats| report::build_table(site.title(), &stats, &PROGRAMMING_LANGUAGES))
    })
    .collect();
    Ok(tables)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let sites = if args.site.is_empty() {
        vec![Site::Headhunter, Site::Superjob]
    } else {
        args.site
    };
    match run(&sites).await {
        Ok(tables) => println!("{}", tables.join("\n\n")),
        Err(e) => {
            log::error!("Failed to collect salary statistics: {}", e);
            std::process::exit(1);
        }
    }
}
