use crate::core::report;
use crate::core::watcher::{DealWatcher, ScanProgress};
use crate::domain::model::{StoreReport, SummaryReport};
use crate::domain::ports::{DealSource, Storage};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const BANNER_WIDTH: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SingleStore,
    AllStores,
    Nationwide,
}

impl Mode {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Mode::SingleStore),
            "2" => Some(Mode::AllStores),
            "3" => Some(Mode::Nationwide),
            _ => None,
        }
    }
}

/// Answers supplied up front; any missing one is asked for on the console.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub mode: Option<String>,
    pub region: Option<String>,
    pub store: Option<String>,
}

#[derive(Debug)]
pub enum Outcome {
    Store(StoreReport),
    Summary(SummaryReport),
    Nationwide,
    /// Invalid input; nothing was fetched or written.
    Rejected(String),
}

pub struct Menu<'a, D: DealSource, S: Storage, R: BufRead, W: Write> {
    watcher: &'a DealWatcher<D, S>,
    input: R,
    output: W,
    preset: Preset,
    summary_examples: usize,
    pause: bool,
}

impl<'a, D: DealSource, S: Storage, R: BufRead, W: Write> Menu<'a, D, S, R, W> {
    pub fn new(watcher: &'a DealWatcher<D, S>, input: R, output: W) -> Self {
        Self {
            watcher,
            input,
            output,
            preset: Preset::default(),
            summary_examples: 10,
            pause: true,
        }
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    pub fn with_summary_examples(mut self, count: usize) -> Self {
        self.summary_examples = count;
        self
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub async fn run(&mut self) -> Result<Outcome> {
        self.print_banner()?;

        let choice = self.ask("\nDitt val (1/2/3): ", self.preset.mode.clone())?;
        let outcome = match Mode::parse(&choice) {
            Some(Mode::SingleStore) => self.run_single_store().await,
            Some(Mode::AllStores) => self.run_all_stores().await,
            Some(Mode::Nationwide) => self.run_nationwide(),
            None => self.reject("Ogiltigt val!"),
        };

        // A failed mode still waits for Enter; its error wins over the prompt's.
        if self.pause {
            let paused = self.ask("\n> Tryck Enter för att avsluta...", None);
            let outcome = outcome?;
            paused?;
            return Ok(outcome);
        }
        outcome
    }

    fn print_banner(&mut self) -> Result<()> {
        let directory = self.watcher.directory();
        let border = format!("+{}+", "-".repeat(BANNER_WIDTH + 2));
        let title = format!(
            "ICA PRICE WATCHER v{} – {} & Hela Sverige!",
            env!("CARGO_PKG_VERSION"),
            directory.province()
        );
        writeln!(self.output, "{}", border)?;
        writeln!(self.output, "| {:<width$} |", title, width = BANNER_WIDTH)?;
        writeln!(self.output, "{}\n", border)?;

        writeln!(self.output, "Välj läge:")?;
        writeln!(self.output, "1. En specifik butik i en ort (t.ex. Lund)")?;
        writeln!(
            self.output,
            "2. Alla butiker i {} ({} st)",
            directory.province(),
            directory.len()
        )?;
        writeln!(self.output, "3. Alla i Sverige (ca 1300 st – ej implementerat)")?;
        Ok(())
    }

    async fn run_single_store(&mut self) -> Result<Outcome> {
        let watcher = self.watcher;
        let directory = watcher.directory();
        let examples: Vec<&str> = directory.regions().iter().map(|r| r.key.as_str()).collect();
        let prompt = format!(
            "Välj ort i {} (t.ex. {}): ",
            directory.province(),
            examples.join(", ")
        );

        let key = self.ask(&prompt, self.preset.region.clone())?;
        let Some(region) = directory.region(&key) else {
            tracing::warn!("Unknown region '{}'", key);
            let message = format!(
                "Ort inte hittad i {}. Lägg till fler i konfigurationen!",
                directory.province()
            );
            return self.reject(&message);
        };

        writeln!(self.output, "\nButiker i {}:", region.name)?;
        for (number, store) in &region.stores {
            writeln!(self.output, "{}. {}", number, store.name)?;
        }

        let number = self.ask("\nVälj nummer: ", self.preset.store.clone())?;
        let Some(store) = region.store(&number) else {
            tracing::warn!("Unknown store number '{}' in {}", number, region.key);
            return self.reject("Butiken finns inte i listan!");
        };

        write!(self.output, "\nScraping {}... ", store.name)?;
        self.output.flush()?;
        let result = watcher.scan_store(store).await?;
        writeln!(self.output, "done")?;

        writeln!(
            self.output,
            "\nTop {} deals för {}:",
            result.top_deals.len(),
            store.name
        )?;
        for (i, deal) in result.top_deals.iter().enumerate() {
            writeln!(self.output, "{}", report::format_deal_line(i + 1, deal))?;
        }
        writeln!(self.output, "Sparat till: {}", result.output_path)?;

        Ok(Outcome::Store(result))
    }

    async fn run_all_stores(&mut self) -> Result<Outcome> {
        let watcher = self.watcher;
        let directory = watcher.directory();
        writeln!(
            self.output,
            "\nHittade {} butiker i {}. Scrapar alla...",
            directory.len(),
            directory.province()
        )?;

        let output = &mut self.output;
        let summary = watcher
            .scan_all(|progress| {
                match progress {
                    ScanProgress::Fetching(store) => {
                        write!(output, "Scraping {}... ", store.name)?;
                        output.flush()?;
                    }
                    ScanProgress::Fetched(_) => writeln!(output, "done")?,
                }
                Ok(())
            })
            .await?;

        writeln!(self.output, "\nSammanställning sparad till: {}", summary.output_path)?;
        writeln!(self.output, "Exempel på top deals från {}:", directory.province())?;
        for (i, entry) in summary.entries.iter().take(self.summary_examples).enumerate() {
            writeln!(self.output, "{}. {}", i + 1, report::format_summary_line(entry))?;
        }

        Ok(Outcome::Summary(summary))
    }

    fn run_nationwide(&mut self) -> Result<Outcome> {
        tracing::info!("Nationwide mode requested; no nationwide directory is configured");
        writeln!(
            self.output,
            "För hela Sverige: Använd ICA:s fulla butiks-API (https://www.ica.se/api/stores). Lägg till i konfigurationen!"
        )?;
        writeln!(
            self.output,
            "Det blir ~1300 butiker – kör på en server för att undvika timeout."
        )?;
        Ok(Outcome::Nationwide)
    }

    fn reject(&mut self, message: &str) -> Result<Outcome> {
        writeln!(self.output, "{}", message)?;
        Ok(Outcome::Rejected(message.to_string()))
    }

    /// Returns the preset answer if given, otherwise one trimmed line from input.
    /// End of input reads as an empty answer.
    fn ask(&mut self, prompt: &str, preset: Option<String>) -> Result<String> {
        if let Some(answer) = preset {
            return Ok(answer.trim().to_string());
        }

        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDealSource;
    use crate::config::toml_config::WatcherConfig;
    use crate::core::directory::StoreDirectory;
    use crate::domain::model::ReportDate;
    use crate::test_support::{MockStorage, OfflineSource};
    use crate::utils::error::WatcherError;
    use std::io::Cursor;

    fn watcher(storage: MockStorage) -> DealWatcher<MockDealSource, MockStorage> {
        let config = WatcherConfig::builtin().unwrap();
        DealWatcher::new(
            MockDealSource::new(&config.source.endpoint).unwrap(),
            storage,
            StoreDirectory::from_config(&config.directory),
            ReportDate::new(43, 2026),
        )
    }

    async fn run_with_input(
        watcher: &DealWatcher<MockDealSource, MockStorage>,
        input: &str,
    ) -> (Outcome, String) {
        let mut output = Vec::new();
        let outcome = Menu::new(watcher, Cursor::new(input.as_bytes().to_vec()), &mut output)
            .run()
            .await
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("1"), Some(Mode::SingleStore));
        assert_eq!(Mode::parse(" 2 "), Some(Mode::AllStores));
        assert_eq!(Mode::parse("3"), Some(Mode::Nationwide));
        assert_eq!(Mode::parse("4"), None);
        assert_eq!(Mode::parse(""), None);
    }

    #[tokio::test]
    async fn test_single_store_flow() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let (outcome, console) = run_with_input(&watcher, "1\nLund\n2\n\n").await;

        match outcome {
            Outcome::Store(report) => assert_eq!(report.store.id, "lund-kvantum"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(console.contains("Butiker i Lund:\n1. ICA Tuna Lund\n"));
        assert!(console.contains("Top 5 deals för ICA Kvantum Lund:\n"));
        assert!(console.contains("1. Mjölk 1L Arla - 12.90 kr (var 18.90 kr)\n"));
        assert!(console.contains("Sparat till: ./ica_deals_lund-kvantum.txt"));
        assert!(console.contains("Tryck Enter för att avsluta"));
        assert_eq!(storage.file_names().await, vec!["ica_deals_lund-kvantum.txt"]);
    }

    #[tokio::test]
    async fn test_unknown_region_writes_nothing() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let (outcome, console) = run_with_input(&watcher, "1\nhelsingborg\n\n").await;

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert!(console.contains("Ort inte hittad i Skåne"));
        assert!(storage.file_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_store_number_writes_nothing() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let (outcome, console) = run_with_input(&watcher, "1\nmalmo\n9\n\n").await;

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert!(console.contains("Butiken finns inte i listan!"));
        assert!(storage.file_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_all_stores_flow() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let mut output = Vec::new();
        let outcome = Menu::new(&watcher, Cursor::new(b"2\n\n".to_vec()), &mut output)
            .with_summary_examples(3)
            .run()
            .await
            .unwrap();
        let console = String::from_utf8(output).unwrap();

        assert!(matches!(outcome, Outcome::Summary(ref s) if s.entries.len() == 10));
        assert!(console.contains("Hittade 10 butiker i Skåne"));
        assert_eq!(console.matches("... done\n").count(), 10);
        assert!(console.contains("Scraping ICA Tuna Lund... done\n"));
        assert!(console.contains("3. ICA Supermarket Mårten: Mjölk 1L Arla - 12.90 kr\n"));
        assert!(!console.contains("4. ICA Nära Nova Lund"));
        assert_eq!(storage.file_names().await, vec!["ica_skanne_summary_v43.txt"]);
    }

    #[tokio::test]
    async fn test_nationwide_is_placeholder() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let (outcome, console) = run_with_input(&watcher, "3\n\n").await;

        assert!(matches!(outcome, Outcome::Nationwide));
        assert!(console.contains("~1300 butiker"));
        assert!(storage.file_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_choice_still_pauses() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let (outcome, console) = run_with_input(&watcher, "x\n\n").await;

        assert!(matches!(outcome, Outcome::Rejected(ref m) if m == "Ogiltigt val!"));
        assert!(console.trim_end().ends_with("Tryck Enter för att avsluta..."));
        assert!(storage.file_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_preset_skips_prompts() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let preset = Preset {
            mode: Some("1".to_string()),
            region: Some("malmo".to_string()),
            store: Some("3".to_string()),
        };
        let mut output = Vec::new();
        let outcome = Menu::new(&watcher, Cursor::new(Vec::new()), &mut output)
            .with_preset(preset)
            .with_pause(false)
            .run()
            .await
            .unwrap();
        let console = String::from_utf8(output).unwrap();

        assert!(matches!(outcome, Outcome::Store(ref r) if r.store.id == "malmo-triangeln"));
        assert!(!console.contains("Ditt val"));
        assert!(!console.contains("Tryck Enter"));
    }

    #[tokio::test]
    async fn test_end_of_input_is_rejected() {
        let storage = MockStorage::new();
        let watcher = watcher(storage.clone());

        let (outcome, _) = run_with_input(&watcher, "").await;
        assert!(matches!(outcome, Outcome::Rejected(_)));
    }

    #[tokio::test]
    async fn test_failed_scan_still_pauses() {
        let storage = MockStorage::new();
        let config = WatcherConfig::builtin().unwrap();
        let watcher = DealWatcher::new(
            OfflineSource,
            storage.clone(),
            StoreDirectory::from_config(&config.directory),
            ReportDate::new(43, 2026),
        );

        let mut output = Vec::new();
        let result = Menu::new(&watcher, Cursor::new(b"2\n\n".to_vec()), &mut output)
            .run()
            .await;
        let console = String::from_utf8(output).unwrap();

        assert!(matches!(result, Err(WatcherError::NetworkError { ref store_id, .. }) if store_id == "tuna-lund"));
        assert!(console.contains("Scraping ICA Tuna Lund... "));
        assert!(!console.contains("done"));
        assert!(console.trim_end().ends_with("Tryck Enter för att avsluta..."));
        assert!(storage.file_names().await.is_empty());
    }
}
