use crate::LabeledTest;
use std::fmt;

/// An ordered collection of labeled tests.
#[derive(Default)]
pub struct TestSuite {
    tests: Vec<Box<dyn LabeledTest>>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a test to the end of the suite.
    pub fn add(&mut self, test: impl LabeledTest + 'static) -> &mut Self {
        self.tests.push(Box::new(test));
        self
    }

    pub fn with(mut self, test: impl LabeledTest + 'static) -> Self {
        self.add(test);
        self
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(|test| test.name())
    }

    /// Run every test in order.
    pub fn run_all(&self) {
        self.run_matching("");
    }

    /// Run the tests whose name contains `filter`, in order.
    ///
    /// # Returns
    ///
    /// The number of tests which were run.
    pub fn run_matching(&self, filter: &str) -> usize {
        let mut count = 0;
        for test in self.tests.iter().filter(|test| test.name().contains(filter)) {
            test.run();
            count += 1;
        }
        log::debug!("ran {} of {} tests", count, self.tests.len());
        count
    }
}

impl fmt::Debug for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
