//! Interactive menu shell
//!
//! Line-based pre-login menu: login, sign up, exit. All input is trimmed
//! before use. End of input ends the session the same way an interrupt would.

use std::io::{self, BufRead, Write};

use todo_core::{AuthService, UserRepository};

use crate::output::{print_error, print_info, print_prompt, print_success};

/// Pre-login menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Login,
    SignUp,
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Login),
            "2" => Ok(MenuChoice::SignUp),
            "3" => Ok(MenuChoice::Exit),
            _ => Err(format!("Invalid selection: {}", s)),
        }
    }
}

/// REPL-style shell over an [`AuthService`]
pub struct Shell<R: UserRepository, I: BufRead, W: Write> {
    auth: AuthService<R>,
    input: I,
    output: W,
    running: bool,
    current_user: Option<String>,
}

impl<R: UserRepository, I: BufRead, W: Write> Shell<R, I, W> {
    pub fn new(auth: AuthService<R>, input: I, output: W) -> Self {
        Self {
            auth,
            input,
            output,
            running: true,
            current_user: None,
        }
    }

    /// Username of the last successful login
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Run the main loop until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        print_info(&mut self.output, "Welcome to the CLI To-Do List App!")?;

        while self.running {
            self.print_pre_login_menu()?;
            match self.prompt("Select an option: ")? {
                Some(choice) => self.dispatch(&choice)?,
                None => self.interrupted()?,
            }
        }

        self.output.flush()
    }

    fn print_pre_login_menu(&mut self) -> io::Result<()> {
        print_info(&mut self.output, "\nPlease choose an action:")?;
        print_info(&mut self.output, "[1] Login")?;
        print_info(&mut self.output, "[2] Sign Up")?;
        print_info(&mut self.output, "[3] Exit")
    }

    /// Execute the action for a trimmed menu choice
    pub fn dispatch(&mut self, choice: &str) -> io::Result<()> {
        match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::Login) => self.handle_login(),
            Ok(MenuChoice::SignUp) => self.handle_sign_up(),
            Ok(MenuChoice::Exit) => self.exit_application(),
            Err(_) => print_error(
                &mut self.output,
                "Invalid selection. Please enter 1, 2, or 3.",
            ),
        }
    }

    fn handle_login(&mut self) -> io::Result<()> {
        let Some(username) = self.prompt("Username: ")? else {
            return self.interrupted();
        };
        let Some(password) = self.prompt("Password: ")? else {
            return self.interrupted();
        };

        if self.auth.authenticate(&username, &password) {
            let greeting = format!("Welcome back, {}!", username);
            print_success(&mut self.output, &greeting)?;
            self.current_user = Some(username);
        } else {
            print_error(&mut self.output, "Invalid username or password.")?;
        }
        Ok(())
    }

    fn handle_sign_up(&mut self) -> io::Result<()> {
        let Some(username) = self.prompt("Username: ")? else {
            return self.interrupted();
        };
        let Some(password) = self.prompt("Password: ")? else {
            return self.interrupted();
        };
        let Some(confirm) = self.prompt("Confirm Password: ")? else {
            return self.interrupted();
        };

        if username.is_empty() || password.is_empty() {
            return print_error(&mut self.output, "Username and password cannot be empty.");
        }

        if password != confirm {
            return print_error(&mut self.output, "Passwords do not match.");
        }

        if self.auth.register(&username, &password) {
            print_success(
                &mut self.output,
                "Account created successfully! You can now log in.",
            )
        } else {
            print_error(&mut self.output, "Username already exists.")
        }
    }

    fn exit_application(&mut self) -> io::Result<()> {
        print_info(&mut self.output, "Goodbye!")?;
        self.running = false;
        Ok(())
    }

    fn interrupted(&mut self) -> io::Result<()> {
        print_info(&mut self.output, "\nInterrupted. Exiting application.")?;
        self.running = false;
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        print_prompt(&mut self.output, label)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;
    use todo_core::UserRecord;

    // ========================================================================
    // Mock Repository
    // ========================================================================

    /// In-memory repository recording every save
    #[derive(Default)]
    struct MockUserRepository {
        users: RefCell<Vec<UserRecord>>,
        saved: RefCell<Vec<Vec<UserRecord>>>,
        loads: RefCell<usize>,
    }

    impl MockUserRepository {
        fn with_user(username: &str, password: &str) -> Self {
            let repo = Self::default();
            repo.users.borrow_mut().push(UserRecord::new(username, password));
            repo
        }
    }

    impl UserRepository for MockUserRepository {
        fn load(&self) -> Vec<UserRecord> {
            *self.loads.borrow_mut() += 1;
            self.users.borrow().clone()
        }

        fn save(&self, records: &[UserRecord]) {
            self.saved.borrow_mut().push(records.to_vec());
            *self.users.borrow_mut() = records.to_vec();
        }
    }

    type TestShell<'a> = Shell<&'a MockUserRepository, Cursor<Vec<u8>>, Vec<u8>>;

    fn shell<'a>(repo: &'a MockUserRepository, input: &str) -> TestShell<'a> {
        Shell::new(
            AuthService::new(repo),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn output(shell: &TestShell<'_>) -> String {
        String::from_utf8_lossy(&shell.output).into_owned()
    }

    // ========================================================================
    // Menu / Dispatch Tests
    // ========================================================================

    #[test]
    fn test_menu_choice_from_str() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Login);
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::SignUp);
        assert_eq!("3".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!("4".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
        assert!(" 1".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_new_shell_state() {
        let repo = MockUserRepository::default();
        let shell = shell(&repo, "");
        assert!(shell.running);
        assert!(shell.current_user().is_none());
    }

    #[test]
    fn test_print_pre_login_menu() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "");
        shell.print_pre_login_menu().unwrap();

        let out = output(&shell);
        assert!(out.contains("Please choose an action:"));
        assert!(out.contains("[1] Login"));
        assert!(out.contains("[2] Sign Up"));
        assert!(out.contains("[3] Exit"));
    }

    #[test]
    fn test_dispatch_invalid_choices() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "");

        shell.dispatch("4").unwrap();
        shell.dispatch("").unwrap();

        assert_eq!(output(&shell).matches("Invalid selection").count(), 2);
        assert!(shell.running);
        assert_eq!(*repo.loads.borrow(), 0);
    }

    #[test]
    fn test_exit_application() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "");

        shell.dispatch("3").unwrap();

        assert!(!shell.running);
        assert!(output(&shell).contains("Goodbye!"));
    }

    // ========================================================================
    // Login Flow Tests
    // ========================================================================

    #[test]
    fn test_handle_login_success() {
        let repo = MockUserRepository::with_user("testuser", "password123");
        let mut shell = shell(&repo, "testuser\npassword123\n");

        shell.dispatch("1").unwrap();

        assert_eq!(shell.current_user(), Some("testuser"));
        assert!(output(&shell).contains("Welcome back, testuser!"));
    }

    #[test]
    fn test_handle_login_failure() {
        let repo = MockUserRepository::with_user("testuser", "password123");
        let mut shell = shell(&repo, "wronguser\nwrongpass\n");

        shell.dispatch("1").unwrap();

        assert!(shell.current_user().is_none());
        assert!(output(&shell).contains("Invalid username or password"));
    }

    #[test]
    fn test_handle_login_trims_whitespace() {
        let repo = MockUserRepository::with_user("testuser", "password");
        let mut shell = shell(&repo, "  testuser  \n  password  \n");

        shell.dispatch("1").unwrap();

        assert_eq!(shell.current_user(), Some("testuser"));
    }

    #[test]
    fn test_handle_login_prompts() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "a\nb\n");

        shell.dispatch("1").unwrap();

        let out = output(&shell);
        assert!(out.contains("Username: "));
        assert!(out.contains("Password: "));
        assert!(!out.contains("Confirm Password: "));
    }

    // ========================================================================
    // Sign Up Flow Tests
    // ========================================================================

    #[test]
    fn test_handle_sign_up_success() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "newuser\npassword123\npassword123\n");

        shell.dispatch("2").unwrap();

        assert_eq!(
            *repo.saved.borrow(),
            vec![vec![UserRecord::new("newuser", "password123")]]
        );
        assert!(output(&shell).contains("Account created successfully"));
        assert!(output(&shell).contains("Confirm Password: "));
    }

    #[test]
    fn test_handle_sign_up_passwords_mismatch() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "newuser\npassword123\ndifferent123\n");

        shell.dispatch("2").unwrap();

        assert_eq!(*repo.loads.borrow(), 0);
        assert!(repo.saved.borrow().is_empty());
        assert!(output(&shell).contains("Passwords do not match"));
    }

    #[test]
    fn test_handle_sign_up_empty_username() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "\npassword123\npassword123\n");

        shell.dispatch("2").unwrap();

        assert_eq!(*repo.loads.borrow(), 0);
        assert!(output(&shell).contains("Username and password cannot be empty"));
    }

    #[test]
    fn test_handle_sign_up_empty_password() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "newuser\n\n\n");

        shell.dispatch("2").unwrap();

        assert_eq!(*repo.loads.borrow(), 0);
        assert!(output(&shell).contains("Username and password cannot be empty"));
    }

    #[test]
    fn test_handle_sign_up_username_exists() {
        let repo = MockUserRepository::with_user("existinguser", "original");
        let mut shell = shell(&repo, "existinguser\npassword123\npassword123\n");

        shell.dispatch("2").unwrap();

        assert!(repo.saved.borrow().is_empty());
        assert!(output(&shell).contains("Username already exists"));
    }

    #[test]
    fn test_handle_sign_up_trims_whitespace() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "  newuser  \n  password123  \n  password123  \n");

        shell.dispatch("2").unwrap();

        assert_eq!(
            *repo.users.borrow(),
            vec![UserRecord::new("newuser", "password123")]
        );
    }

    // ========================================================================
    // Main Loop Tests
    // ========================================================================

    #[test]
    fn test_run_with_exit_command() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "3\n");

        shell.run().unwrap();

        assert!(!shell.running);
        let out = output(&shell);
        assert!(out.starts_with("Welcome to the CLI To-Do List App!"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_run_multiple_invalid_choices() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "9\ninvalid\n3\n");

        shell.run().unwrap();

        let out = output(&shell);
        assert_eq!(out.matches("Invalid selection").count(), 2);
        assert_eq!(out.matches("[3] Exit").count(), 3);
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_run_ends_at_end_of_input() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "");

        shell.run().unwrap();

        assert!(!shell.running);
        assert!(output(&shell).contains("Interrupted. Exiting application."));
    }

    #[test]
    fn test_run_end_of_input_mid_sign_up() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "2\nnewuser\n");

        shell.run().unwrap();

        assert!(!shell.running);
        assert!(repo.saved.borrow().is_empty());
        assert!(output(&shell).contains("Interrupted. Exiting application."));
    }

    #[test]
    fn test_run_sign_up_then_login() {
        let repo = MockUserRepository::default();
        let mut shell = shell(&repo, "2\nalice\npw1\npw1\n1\nalice\npw1\n3\n");

        shell.run().unwrap();

        assert_eq!(shell.current_user(), Some("alice"));
        let out = output(&shell);
        assert!(out.contains("Account created successfully"));
        assert!(out.contains("Welcome back, alice!"));
    }
}
