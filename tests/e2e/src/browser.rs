use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Wait for `selector` and return the value of `name`, if set.
    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        let value = element.get_attribute_value(name)?;
        Ok(value)
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        self.tab.wait_for_element(selector)?;
        Ok(self.tab.find_elements(selector)?.len())
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
