//! The interactive shell
//!
//! Reads commands from a line-oriented prompt and dispatches them against
//! the logged-in user's wallet. The wallet is loaded at login, saved at
//! logout and exit, and every sub-prompt can be cancelled with `back`.
//! Core errors are recoverable here: the shell prints them and re-prompts
//! or abandons the current command, it never crashes the process.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::stats::{
    category_stats_view, over_budget_warning, overspent_warning, selected_summary_view,
    totals_view,
};
use crate::error::{FinFlowError, FinFlowResult};
use crate::export::{export_report, report_file_name, Report, ReportFormat};
use crate::models::{TransactionKind, Wallet};
use crate::services::auth::AuthService;
use crate::services::stats::Stats;
use crate::storage::Storage;

const CMD_REGISTER: &str = "register";
const CMD_LOGIN: &str = "login";
const CMD_HELP: &str = "help";
const CMD_EXIT: &str = "exit";
const CMD_ADD_CAT: &str = "addcat";
const CMD_ADD_INC: &str = "addinc";
const CMD_ADD_EXP: &str = "addexp";
const CMD_SET_BUDGET: &str = "setbudget";
const CMD_STATS: &str = "stats";
const CMD_STATS_CAT: &str = "stats cat";
const CMD_STATS_SELECTED: &str = "stats cats";
const CMD_STATS_TO_FILE: &str = "stats file";
const CMD_LOGOUT: &str = "logout";
const CMD_BACK: &str = "back";

/// The logged-in user's session: login plus the wallet it owns
struct Session {
    login: String,
    wallet: Wallet,
}

/// The interactive FinFlow shell
pub struct Shell<R, W> {
    input: R,
    output: W,
    storage: Storage,
    settings: Settings,
    session: Option<Session>,
    /// Whether stdin is a terminal; controls hidden password entry
    interactive: bool,
    running: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a new shell
    pub fn new(storage: Storage, settings: Settings, input: R, output: W) -> Self {
        Self {
            input,
            output,
            storage,
            settings,
            session: None,
            interactive: false,
            running: true,
        }
    }

    /// Enable hidden password entry (stdin is a terminal)
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Run the command loop until `exit` or end of input
    pub fn run(&mut self) -> FinFlowResult<()> {
        self.print_banner()?;
        self.print_guest_menu()?;

        while self.running {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                // end of input behaves like exit
                self.do_exit()?;
                break;
            };
            let cmd = line.to_lowercase();

            if self.session.is_none() {
                self.handle_guest_command(&cmd)?;
            } else {
                self.handle_user_command(&cmd)?;
            }
            writeln!(self.output)?;
        }

        Ok(())
    }

    fn handle_guest_command(&mut self, cmd: &str) -> FinFlowResult<()> {
        match cmd {
            CMD_REGISTER => self.do_register(),
            CMD_LOGIN => self.do_login(),
            CMD_HELP => self.print_guest_menu(),
            CMD_EXIT => self.do_exit(),
            _ => self.print_unknown_command(),
        }
    }

    fn handle_user_command(&mut self, cmd: &str) -> FinFlowResult<()> {
        match cmd {
            CMD_ADD_CAT => self.do_add_category().map(|_| ()),
            CMD_ADD_INC => self.do_record(TransactionKind::Income),
            CMD_ADD_EXP => self.do_record(TransactionKind::Expense),
            CMD_SET_BUDGET => self.do_set_budget(),
            CMD_STATS => self.do_total_stats(),
            CMD_STATS_CAT => self.do_category_stats(),
            CMD_STATS_SELECTED => self.do_stats_selected(),
            CMD_STATS_TO_FILE => self.do_stats_to_file(),
            CMD_LOGOUT => self.do_logout(),
            CMD_HELP => self.print_user_menu(),
            CMD_EXIT => self.do_exit(),
            _ => self.print_unknown_command(),
        }
    }

    // === Menus ===

    fn print_banner(&mut self) -> FinFlowResult<()> {
        writeln!(
            self.output,
            "======================================================="
        )?;
        writeln!(self.output, "FinFlow - personal finance manager")?;
        writeln!(self.output, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(
            self.output,
            "======================================================="
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_guest_menu(&mut self) -> FinFlowResult<()> {
        writeln!(self.output, "[Guest] Available commands:")?;
        writeln!(self.output, "  {CMD_REGISTER}        - create a new user account")?;
        writeln!(self.output, "  {CMD_LOGIN}           - sign in with login and password")?;
        writeln!(self.output, "  {CMD_HELP}            - show this help")?;
        writeln!(self.output, "  {CMD_EXIT}            - quit the application")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_user_menu(&mut self) -> FinFlowResult<()> {
        let login = self.session.as_ref().map(|s| s.login.clone()).unwrap_or_default();
        writeln!(self.output, "[{login}] Available commands:")?;
        writeln!(self.output, "  {CMD_ADD_CAT}          - add an income/expense category")?;
        writeln!(self.output, "  {CMD_SET_BUDGET}       - set or change a category budget")?;
        writeln!(self.output, "  {CMD_ADD_INC}          - record an income")?;
        writeln!(self.output, "  {CMD_ADD_EXP}          - record an expense")?;
        writeln!(self.output, "  {CMD_STATS}            - overall income/expense totals")?;
        writeln!(self.output, "  {CMD_STATS_CAT}        - per-category totals")?;
        writeln!(self.output, "  {CMD_STATS_SELECTED}       - totals for selected categories")?;
        writeln!(self.output, "  {CMD_STATS_TO_FILE}       - save a report to a file (csv, json, yaml)")?;
        writeln!(self.output, "  {CMD_LOGOUT}           - sign out")?;
        writeln!(self.output, "  {CMD_HELP}             - show this help")?;
        writeln!(self.output, "  {CMD_EXIT}             - quit the application")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_unknown_command(&mut self) -> FinFlowResult<()> {
        writeln!(
            self.output,
            "Unknown command. Type '{CMD_HELP}' for the list of commands."
        )?;
        Ok(())
    }

    // === Input helpers ===

    /// Read and trim one line; `None` at end of input
    fn read_line(&mut self) -> FinFlowResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read a password, hiding the input when attached to a terminal
    fn read_password(&mut self) -> FinFlowResult<Option<String>> {
        if self.interactive {
            let password = rpassword::prompt_password("")
                .map_err(|e| FinFlowError::Io(e.to_string()))?;
            Ok(Some(password.trim().to_string()))
        } else {
            self.read_line()
        }
    }

    fn is_back(&mut self, input: &str) -> FinFlowResult<bool> {
        if input.eq_ignore_ascii_case(CMD_BACK) {
            writeln!(self.output, "Back to the main menu.")?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Prompt until a positive amount is entered
    fn prompt_positive_amount(&mut self) -> FinFlowResult<Option<i64>> {
        loop {
            match self.prompt_amount()? {
                None => return Ok(None),
                Some(amount) if amount > 0 => return Ok(Some(amount)),
                Some(_) => {
                    writeln!(self.output, "The amount must be positive.")?;
                    writeln!(self.output, "Enter a positive number: ")?;
                }
            }
        }
    }

    /// Prompt until a non-negative amount is entered (0 disables a budget)
    fn prompt_budget_limit(&mut self) -> FinFlowResult<Option<i64>> {
        loop {
            match self.prompt_amount()? {
                None => return Ok(None),
                Some(limit) if limit >= 0 => return Ok(Some(limit)),
                Some(_) => {
                    writeln!(self.output, "The limit cannot be negative.")?;
                    writeln!(self.output, "Enter a number (0 disables the budget): ")?;
                }
            }
        }
    }

    /// Read one number, re-prompting on anything unparseable
    fn prompt_amount(&mut self) -> FinFlowResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if self.is_back(&line)? {
                return Ok(None);
            }
            match line.parse::<i64>() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => {
                    writeln!(self.output, "Enter digits only, without other symbols: ")?;
                }
            }
        }
    }

    /// Prompt for a category name.
    ///
    /// With `must_exist`, re-prompts until a registered category is entered;
    /// typing `addcat` inline registers a new category and uses it.
    /// Returns `None` when the user backs out.
    fn prompt_category(&mut self, must_exist: bool) -> FinFlowResult<Option<String>> {
        loop {
            let Some(name) = self.read_line()? else {
                return Ok(None);
            };

            if self.is_back(&name)? {
                return Ok(None);
            }

            if must_exist && name.eq_ignore_ascii_case(CMD_ADD_CAT) {
                if let Some(added) = self.do_add_category()? {
                    return Ok(Some(added));
                }
                continue;
            }

            if name.is_empty() {
                writeln!(self.output, "The name cannot be empty.")?;
                writeln!(
                    self.output,
                    "Enter a category name (or '{CMD_BACK}' to return to the menu): "
                )?;
                continue;
            }

            let known = self
                .session
                .as_ref()
                .is_some_and(|s| s.wallet.has_category(&name));
            if must_exist && !known {
                writeln!(self.output, "No such category exists.")?;
                writeln!(
                    self.output,
                    "Enter '{CMD_BACK}' to return to the menu, or '{CMD_ADD_CAT}' to add the category."
                )?;
                continue;
            }

            return Ok(Some(name));
        }
    }

    // === Guest commands ===

    fn do_register(&mut self) -> FinFlowResult<()> {
        let login = loop {
            write!(self.output, "Login (or '{CMD_BACK}' to return to the menu): ")?;
            self.output.flush()?;
            let Some(login) = self.read_line()? else {
                return Ok(());
            };
            if self.is_back(&login)? {
                return Ok(());
            }

            let auth = AuthService::new(&self.storage.users);
            if auth.is_registered(&login)? {
                writeln!(self.output, "A user with this login already exists!")?;
                continue;
            }
            if login.is_empty() {
                writeln!(self.output, "The login cannot be empty.")?;
                continue;
            }
            break login;
        };

        write!(self.output, "Password: ")?;
        self.output.flush()?;
        let Some(password) = self.read_password()? else {
            return Ok(());
        };

        let auth = AuthService::new(&self.storage.users);
        match auth.register(&login, &password) {
            Ok(user) => {
                writeln!(
                    self.output,
                    "User {user} registered. Use the '{CMD_LOGIN}' command to sign in."
                )?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn do_login(&mut self) -> FinFlowResult<()> {
        let login = loop {
            write!(self.output, "Login (or '{CMD_BACK}' to return to the menu): ")?;
            self.output.flush()?;
            let Some(login) = self.read_line()? else {
                return Ok(());
            };
            if self.is_back(&login)? {
                return Ok(());
            }

            let auth = AuthService::new(&self.storage.users);
            if !auth.is_registered(&login)? {
                writeln!(self.output, "No user with this login found!")?;
                continue;
            }
            break login;
        };

        loop {
            write!(
                self.output,
                "Password (or '{CMD_BACK}' to return to the menu): "
            )?;
            self.output.flush()?;
            let Some(password) = self.read_password()? else {
                return Ok(());
            };
            if self.is_back(&password)? {
                return Ok(());
            }

            let auth = AuthService::new(&self.storage.users);
            match auth.authenticate(&login, &password) {
                Ok(_) => break,
                Err(FinFlowError::Auth(_)) => {
                    writeln!(self.output, "Incorrect password!")?;
                }
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    return Ok(());
                }
            }
        }

        let wallet = self.load_wallet(&login)?;
        self.session = Some(Session {
            login: login.clone(),
            wallet,
        });
        writeln!(self.output, "Welcome, {login}!")?;
        self.print_user_menu()?;
        Ok(())
    }

    /// Load a wallet snapshot; a missing or corrupt snapshot falls back to
    /// an empty wallet (with a warning in the corrupt case)
    fn load_wallet(&mut self, login: &str) -> FinFlowResult<Wallet> {
        match self.storage.wallets.load(login) {
            Ok(Some(wallet)) => {
                writeln!(self.output, "Wallet data loaded.")?;
                Ok(wallet)
            }
            Ok(None) => Ok(Wallet::new()),
            Err(e) => {
                writeln!(
                    self.output,
                    "Warning: could not load wallet data ({e}); starting with an empty wallet."
                )?;
                Ok(Wallet::new())
            }
        }
    }

    /// Save the session wallet; failures are warnings, never fatal
    fn save_wallet(&mut self) -> FinFlowResult<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        match self.storage.wallets.save(&session.login, &session.wallet) {
            Ok(()) => {
                let path = self.storage.wallets.wallet_file(&session.login);
                writeln!(self.output, "Wallet data saved to {}", path.display())?;
            }
            Err(e) => {
                writeln!(self.output, "Warning: wallet data was not saved ({e}).")?;
            }
        }
        Ok(())
    }

    // === User commands ===

    /// Prompt for and register a new category; returns the name on success
    fn do_add_category(&mut self) -> FinFlowResult<Option<String>> {
        loop {
            write!(self.output, "Category name: ")?;
            self.output.flush()?;
            let Some(name) = self.prompt_category(false)? else {
                return Ok(None);
            };

            let outcome = match &mut self.session {
                Some(session) => session.wallet.add_category(name.clone()),
                None => return Ok(None),
            };
            match outcome {
                Ok(()) => {
                    writeln!(self.output, "Category {name} added.")?;
                    return Ok(Some(name));
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn do_record(&mut self, kind: TransactionKind) -> FinFlowResult<()> {
        write!(self.output, "Category: ")?;
        self.output.flush()?;
        let Some(name) = self.prompt_category(true)? else {
            return Ok(());
        };

        write!(self.output, "Amount: ")?;
        self.output.flush()?;
        let Some(amount) = self.prompt_positive_amount()? else {
            return Ok(());
        };

        let outcome = match &mut self.session {
            Some(session) => match kind {
                TransactionKind::Income => session.wallet.record_income(amount, &name),
                TransactionKind::Expense => session.wallet.record_expense(amount, &name),
            },
            None => return Ok(()),
        };

        match outcome {
            Ok(()) => {
                self.warn_category_budget(&name)?;
                self.warn_total_budget()?;
                match kind {
                    TransactionKind::Income => writeln!(self.output, "Income recorded.")?,
                    TransactionKind::Expense => writeln!(self.output, "Expense recorded.")?,
                }
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn do_set_budget(&mut self) -> FinFlowResult<()> {
        write!(self.output, "Category: ")?;
        self.output.flush()?;
        let Some(name) = self.prompt_category(true)? else {
            return Ok(());
        };

        write!(self.output, "Monthly limit: ")?;
        self.output.flush()?;
        let Some(limit) = self.prompt_budget_limit()? else {
            return Ok(());
        };

        let outcome = match &mut self.session {
            Some(session) => session.wallet.set_budget(&name, limit),
            None => return Ok(()),
        };

        match outcome {
            Ok(()) => {
                writeln!(self.output, "Budget for category '{name}' set: {limit}")?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn do_total_stats(&mut self) -> FinFlowResult<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let stats = Stats::new(&session.wallet);
        let view = totals_view(
            stats.total(TransactionKind::Income),
            stats.total(TransactionKind::Expense),
            &self.settings.currency_symbol,
        );
        write!(self.output, "{view}")?;
        Ok(())
    }

    fn do_category_stats(&mut self) -> FinFlowResult<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let stats = Stats::new(&session.wallet);
        let rows = stats.all_breakdowns();
        let view = category_stats_view(&rows, &self.settings.currency_symbol);
        write!(self.output, "{view}")?;

        if self.settings.budget_warnings {
            for row in &rows {
                if row.budget > 0 && row.remaining < 0 {
                    let warning = over_budget_warning(
                        &row.name,
                        -row.remaining,
                        &self.settings.currency_symbol,
                    );
                    writeln!(self.output, "{warning}")?;
                }
            }
        }
        Ok(())
    }

    fn do_stats_selected(&mut self) -> FinFlowResult<()> {
        let names = loop {
            write!(
                self.output,
                "Enter categories separated by commas (e.g. Food,Taxi): "
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if self.is_back(&line)? {
                return Ok(());
            }
            if line.is_empty() {
                writeln!(
                    self.output,
                    "The field cannot be empty. Try again (or enter '{CMD_BACK}' to return to the menu)."
                )?;
                continue;
            }
            let names: Vec<String> = line
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            break names;
        };

        let Some(session) = &self.session else {
            return Ok(());
        };
        let stats = Stats::new(&session.wallet);
        let summary = match stats.selected_summary(&names) {
            Ok(summary) => summary,
            Err(FinFlowError::NoValidCategories) => {
                for name in &names {
                    writeln!(self.output, "Category {name} not found.")?;
                }
                writeln!(
                    self.output,
                    "No categories given, or none of them exist. Command cancelled."
                )?;
                return Ok(());
            }
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(());
            }
        };

        for name in &summary.missing {
            writeln!(self.output, "Category {name} not found.")?;
        }

        let view = selected_summary_view(&summary, &self.settings.currency_symbol);
        write!(self.output, "{view}")?;

        if self.settings.budget_warnings {
            for row in &summary.rows {
                if row.budget > 0 && row.remaining < 0 {
                    let warning = over_budget_warning(
                        &row.name,
                        -row.remaining,
                        &self.settings.currency_symbol,
                    );
                    writeln!(self.output, "{warning}")?;
                }
            }
        }
        self.warn_total_budget()?;
        Ok(())
    }

    fn do_stats_to_file(&mut self) -> FinFlowResult<()> {
        let format = loop {
            write!(
                self.output,
                "Report format - csv, json or yaml (default csv): "
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if self.is_back(&line)? {
                return Ok(());
            }
            if line.is_empty() {
                break ReportFormat::Csv;
            }
            match ReportFormat::parse(&line) {
                Some(format) => break format,
                None => {
                    writeln!(self.output, "Unknown format. Choose csv, json or yaml.")?;
                }
            }
        };

        let Some(session) = &self.session else {
            return Ok(());
        };

        let reports_dir = self.storage.paths().reports_dir();
        if let Err(e) = std::fs::create_dir_all(&reports_dir) {
            writeln!(
                self.output,
                "Could not create the reports directory {}: {e}",
                reports_dir.display()
            )?;
            return Ok(());
        }

        let file_name = report_file_name(&session.login, &self.settings.date_format, format);
        let path = reports_dir.join(file_name);
        let report = Report::from_wallet(&session.wallet);

        let result = std::fs::File::create(&path)
            .map_err(|e| FinFlowError::Export(e.to_string()))
            .and_then(|file| {
                let mut writer = std::io::BufWriter::new(file);
                export_report(&report, &mut writer, format)?;
                writer
                    .flush()
                    .map_err(|e| FinFlowError::Export(e.to_string()))
            });

        match result {
            Ok(()) => writeln!(
                self.output,
                "Report ({}) saved: {}",
                format.label(),
                path.display()
            )?,
            Err(e) => writeln!(self.output, "Failed to save the report: {e}")?,
        }
        Ok(())
    }

    fn do_logout(&mut self) -> FinFlowResult<()> {
        self.save_wallet()?;
        if let Some(session) = self.session.take() {
            writeln!(self.output, "You signed out of {}.", session.login)?;
        }
        Ok(())
    }

    fn do_exit(&mut self) -> FinFlowResult<()> {
        self.save_wallet()?;
        self.session = None;
        writeln!(self.output, "Goodbye!")?;
        self.running = false;
        Ok(())
    }

    // === Budget warnings ===

    fn warn_category_budget(&mut self, name: &str) -> FinFlowResult<()> {
        if !self.settings.budget_warnings {
            return Ok(());
        }
        let Some(session) = &self.session else {
            return Ok(());
        };
        let stats = Stats::new(&session.wallet);
        if stats.is_over_budget(name).unwrap_or(false) {
            let remaining = stats.remaining_budget(name)?;
            let warning =
                over_budget_warning(name, -remaining, &self.settings.currency_symbol);
            writeln!(self.output, "{warning}")?;
            writeln!(
                self.output,
                "Use the '{CMD_SET_BUDGET}' command to adjust the limit."
            )?;
        }
        Ok(())
    }

    fn warn_total_budget(&mut self) -> FinFlowResult<()> {
        if !self.settings.budget_warnings {
            return Ok(());
        }
        let Some(session) = &self.session else {
            return Ok(());
        };
        let stats = Stats::new(&session.wallet);
        if stats.is_overall_overspent() {
            let warning = overspent_warning(
                stats.total(TransactionKind::Income),
                stats.total(TransactionKind::Expense),
                &self.settings.currency_symbol,
            );
            writeln!(self.output, "{warning}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinFlowPaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_shell(input: &str) -> (TempDir, String) {
        let temp_dir = TempDir::new().unwrap();
        let output = run_shell_in(&temp_dir, input);
        (temp_dir, output)
    }

    fn run_shell_in(temp_dir: &TempDir, input: &str) -> String {
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let mut output = Vec::new();
        let mut shell = Shell::new(
            storage,
            Settings::default(),
            Cursor::new(input.to_string()),
            &mut output,
        );
        shell.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_banner_and_exit() {
        let (_dir, output) = run_shell("exit\n");
        assert!(output.contains("FinFlow - personal finance manager"));
        assert!(output.contains("[Guest] Available commands:"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_dir, output) = run_shell("");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_unknown_command() {
        let (_dir, output) = run_shell("frobnicate\nexit\n");
        assert!(output.contains("Unknown command"));
    }

    #[test]
    fn test_register_and_login() {
        let (_dir, output) = run_shell(
            "register\nalice\nsecret\nlogin\nalice\nsecret\nexit\n",
        );
        assert!(output.contains("User alice registered"));
        assert!(output.contains("Welcome, alice!"));
        assert!(output.contains("[alice] Available commands:"));
    }

    #[test]
    fn test_register_duplicate_login_reprompts() {
        let (_dir, output) = run_shell(
            "register\nalice\nsecret\nregister\nalice\nback\nexit\n",
        );
        assert!(output.contains("A user with this login already exists!"));
        assert!(output.contains("Back to the main menu."));
    }

    #[test]
    fn test_login_wrong_password_reprompts() {
        let (_dir, output) = run_shell(
            "register\nalice\nsecret\nlogin\nalice\nwrong\nsecret\nexit\n",
        );
        assert!(output.contains("Incorrect password!"));
        assert!(output.contains("Welcome, alice!"));
    }

    #[test]
    fn test_full_ledger_flow() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "setbudget\nFood\n4000\n",
            "addexp\nFood\n800\n",
            "addcat\nSalary\n",
            "addinc\nSalary\n60000\n",
            "stats\n",
            "stats cat\n",
            "exit\n",
        ));
        assert!(output.contains("Category Food added."));
        assert!(output.contains("Budget for category 'Food' set: 4000"));
        assert!(output.contains("Expense recorded."));
        assert!(output.contains("Income recorded."));
        assert!(output.contains("Total income: 60000"));
        assert!(output.contains("Total expenses: 800"));
        assert!(output.contains("Balance: 59200"));
        assert!(output.contains("    Food: 4000. Remaining budget: 3200"));
    }

    #[test]
    fn test_over_budget_warning_after_expense() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nUtilities\n",
            "setbudget\nUtilities\n2500\n",
            "addexp\nUtilities\n3000\n",
            "exit\n",
        ));
        assert!(output.contains("budget for category Utilities exceeded by 500"));
        // no income at all, so the overall warning fires too
        assert!(output.contains("expenses (3000) exceeded income (0) by 3000"));
    }

    #[test]
    fn test_zero_budget_never_warns() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nSalary\n",
            "addinc\nSalary\n100000\n",
            "addcat\nTaxi\n",
            "addexp\nTaxi\n1500\n",
            "exit\n",
        ));
        assert!(!output.contains("budget for category Taxi"));
    }

    #[test]
    fn test_record_unknown_category_reprompts() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addexp\nGhost\nback\n",
            "exit\n",
        ));
        assert!(output.contains("No such category exists."));
    }

    #[test]
    fn test_inline_addcat_during_expense() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addexp\naddcat\nFood\n250\n",
            "exit\n",
        ));
        assert!(output.contains("Category Food added."));
        assert!(output.contains("Expense recorded."));
    }

    #[test]
    fn test_amount_prompt_rejects_garbage() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "addexp\nFood\nabc\n-5\n100\n",
            "exit\n",
        ));
        assert!(output.contains("Enter digits only"));
        assert!(output.contains("The amount must be positive."));
        assert!(output.contains("Expense recorded."));
    }

    #[test]
    fn test_stats_selected_mixed_names() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "addexp\nFood\n800\n",
            "stats cats\nFood,Ghost\n",
            "exit\n",
        ));
        assert!(output.contains("Category Ghost not found."));
        assert!(output.contains("Expenses over selected categories: 800"));
    }

    #[test]
    fn test_stats_selected_all_invalid_cancels() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "stats cats\nGhost,Phantom\n",
            "exit\n",
        ));
        assert!(output.contains("Command cancelled."));
    }

    #[test]
    fn test_stats_to_file_writes_report() {
        let (dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "addexp\nFood\n800\n",
            "stats file\ncsv\n",
            "exit\n",
        ));
        assert!(output.contains("Report (CSV) saved:"));

        let reports: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
            .unwrap()
            .collect();
        assert_eq!(reports.len(), 1);
        let contents =
            std::fs::read_to_string(reports[0].as_ref().unwrap().path()).unwrap();
        assert!(contents.contains("Food,0,800,0,-800"));
    }

    #[test]
    fn test_stats_to_file_json_format() {
        let (dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "addcat\nFood\n",
            "addexp\nFood\n800\n",
            "stats file\njson\n",
            "exit\n",
        ));
        assert!(output.contains("Report (JSON) saved:"));

        let reports: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
            .unwrap()
            .collect();
        assert_eq!(reports.len(), 1);
        let path = reports[0].as_ref().unwrap().path();
        assert_eq!(path.extension().unwrap(), "json");
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["total_expense"], 800);
    }

    #[test]
    fn test_stats_to_file_unknown_format_reprompts() {
        let (_dir, output) = run_shell(concat!(
            "register\nalice\nsecret\n",
            "login\nalice\nsecret\n",
            "stats file\npdf\nback\n",
            "exit\n",
        ));
        assert!(output.contains("Unknown format. Choose csv, json or yaml."));
        assert!(output.contains("Back to the main menu."));
    }

    #[test]
    fn test_overlong_category_name_reprompts() {
        let input = format!(
            "register\nalice\nsecret\nlogin\nalice\nsecret\naddcat\n{}\nFood\nexit\n",
            "a".repeat(51)
        );
        let (_dir, output) = run_shell(&input);
        assert!(output.contains("too long"));
        assert!(output.contains("Category Food added."));
    }

    #[test]
    fn test_wallet_persists_across_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let first = run_shell_in(
            &temp_dir,
            concat!(
                "register\nalice\nsecret\n",
                "login\nalice\nsecret\n",
                "addcat\nFood\n",
                "setbudget\nFood\n1000\n",
                "addexp\nFood\n250\n",
                "logout\n",
                "exit\n",
            ),
        );
        assert!(first.contains("Wallet data saved"));
        assert!(first.contains("You signed out of alice."));

        let second = run_shell_in(
            &temp_dir,
            concat!("login\nalice\nsecret\n", "stats cat\n", "exit\n"),
        );
        assert!(second.contains("Wallet data loaded."));
        assert!(second.contains("    Food: 1000. Remaining budget: 750"));
    }

    #[test]
    fn test_corrupt_wallet_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        run_shell_in(&temp_dir, "register\nalice\nsecret\nexit\n");
        std::fs::write(
            temp_dir.path().join("data").join("alice.wallet.json"),
            "garbage",
        )
        .unwrap();

        let output = run_shell_in(
            &temp_dir,
            "login\nalice\nsecret\nstats\nexit\n",
        );
        assert!(output.contains("could not load wallet data"));
        assert!(output.contains("Total income: 0"));
    }

    #[test]
    fn test_back_cancels_register() {
        let (_dir, output) = run_shell("register\nback\nexit\n");
        assert!(output.contains("Back to the main menu."));
        assert!(!output.contains("Password:"));
    }
}
