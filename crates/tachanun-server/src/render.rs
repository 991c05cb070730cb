use minijinja::Environment;
use serde::Serialize;
use tachanun_core::DayReport;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

/// Page context: the day report plus the civil date it was computed for.
#[derive(Serialize)]
struct PageContext<'a> {
    #[serde(flatten)]
    report: &'a DayReport,
    civil_date: String,
}

/// The page templates, parsed once at startup.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn load() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_day(&self, report: &DayReport, civil_date: chrono::NaiveDate) -> anyhow::Result<String> {
        let tmpl = self.env.get_template("index.html")?;
        let html = tmpl.render(PageContext {
            report,
            civil_date: civil_date.format("%Y-%m-%d").to_string(),
        })?;
        Ok(html)
    }
}
