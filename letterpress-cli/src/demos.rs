//! Bundled demo messages.

use std::fmt;

use clap::ValueEnum;
use letterpress::{Alignment, Builder, Row, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Welcome,
    Reset,
    Receipt,
}

impl Demo {
    pub fn all() -> &'static [Demo] {
        &[Demo::Welcome, Demo::Reset, Demo::Receipt]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Demo::Welcome => "welcome",
            Demo::Reset => "reset",
            Demo::Receipt => "receipt",
        }
    }

    /// A fresh builder for this demo, cloned from the current default.
    pub fn builder(&self) -> Builder {
        match self {
            Demo::Welcome => welcome(),
            Demo::Reset => reset(),
            Demo::Receipt => receipt(),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn welcome() -> Builder {
    letterpress::new()
        .subject("Welcome aboard")
        .to(["john.doe@example.com"])
        .name("John Doe")
        .preheader("Thanks for signing up")
        .line("Welcome to Letterpress! We're very excited to have you on board.")
        .line("To get started, please click here:")
        .action("Get Started", "https://example.com/get-started")
        .line("We're glad to have you on board.")
        .line("Need help, or have questions? Just reply to this email, we'd love to help.")
}

fn reset() -> Builder {
    letterpress::new()
        .subject("Reset your password")
        .to(["john.doe@example.com"])
        .name("John Doe")
        .line(
            "You have received this email because a password reset request for your account was received.",
        )
        .line("Click the button below to reset your password:")
        .action("Reset your password", "https://example.com/reset-password")
        .line("If you did not request a password reset, no further action is required on your part.")
}

fn receipt() -> Builder {
    let table = Table::new([
        Row::new()
            .cell("Item", "Golang")
            .cell(
                "Description",
                "An open-source programming language supported by Google.",
            )
            .cell("Price", "$10.99"),
        Row::new()
            .cell("Item", "Letterpress")
            .cell("Description", "Programmatically create beautiful e-mails")
            .cell("Price", "$1.99"),
    ])
    .width("Item", "20%")
    .width("Price", "15%")
    .align("Price", Alignment::Right);

    letterpress::new()
        .subject("Your receipt")
        .to(["john.doe@example.com"])
        .name("John Doe")
        .line("Your order has been processed successfully.")
        .table(table)
        .line("You can check the status of your order and more in your dashboard:")
        .action("Go to Dashboard", "https://example.com/dashboard")
        .line("We thank you for your purchase.")
}
