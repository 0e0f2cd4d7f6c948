use anyhow::Result;
use colored::Colorize;

use crate::pages::ContactUsPage;

pub async fn show_contact() -> Result<()> {
    let page = ContactUsPage::new();

    println!("{}", page.info.organization.bold());
    println!();
    println!("  {}", page.info.address);
    println!("  Call Us:  {}", page.info.phone);
    println!("  Email Us: {}", page.info.email);

    Ok(())
}
