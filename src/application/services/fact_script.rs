//! Fixed script of platform facts for the narrative panel.

/// Line emitted once every fact has been shown.
pub const FILLER_LINE: &str = "...";

/// Facts revealed one per step, in order.
pub const PLATFORM_FACTS: [&str; 6] = [
    "Heroku is a cloud-based Platform-as-a-Service (PaaS) that allows developers to build, deploy, and manage applications without worrying about server or infrastructure management.",
    "It is a fully managed container-based cloud platform for deploying modern applications.",
    "Allows developers to host applications online without managing physical servers.",
    "Supports multiple programming languages, including Java, Python, Ruby, Node.js, and more.",
    "Developers can deploy apps quickly using Git or the Heroku CLI, simplifying the release process.",
    "Automatically adjusts resources so applications can handle more users when traffic increases.",
];

/// Steps through a fixed list of lines, then repeats the filler.
#[derive(Debug, Clone)]
pub struct FactScript {
    facts: &'static [&'static str],
    position: usize,
}

impl Default for FactScript {
    fn default() -> Self {
        Self::new(&PLATFORM_FACTS)
    }
}

impl FactScript {
    #[must_use]
    pub const fn new(facts: &'static [&'static str]) -> Self {
        Self { facts, position: 0 }
    }

    /// Returns the next fact, or the filler once exhausted.
    pub fn next_fact(&mut self) -> &'static str {
        match self.facts.get(self.position).copied() {
            Some(fact) => {
                self.position += 1;
                fact
            }
            None => FILLER_LINE,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.facts.len()
    }
}
