//! Rendering of a [`TopologyScript`] to Python source.

use std::fmt;

use super::types::{Declaration, TopologyScript};
use crate::utils::float::format_python_float;

/// Indentation of statements inside `__init__`
const BODY_INDENT: &str = "\t\t";

/// Double-quoted Python string literal
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Switch { variable, name } => {
                write!(f, "{} = self.addSwitch({})", variable, Quoted(name))
            }
            Declaration::Host { variable, name } => {
                write!(f, "{} = self.addHost({})", variable, Quoted(name))
            }
            Declaration::HostLink { switch, host } => {
                write!(f, "self.addLink({}, {} )", Quoted(switch), Quoted(host))
            }
            Declaration::Link(link) => {
                write!(f, "self.addLink({}, {}", link.source, link.target)?;
                if let Some(bw) = &link.bandwidth {
                    write!(f, ", bw={}", bw)?;
                }
                if let Some(delay) = link.delay_ms {
                    let delay = format!("{}ms", format_python_float(delay));
                    write!(f, ", delay={}", Quoted(&delay))?;
                }
                f.write_str(")")
            }
        }
    }
}

impl TopologyScript {
    /// Lines of the script, each terminated by a newline.
    pub fn render_lines(&self) -> Vec<String> {
        let class_name = self.class_name();
        let mut lines = vec![
            "#!/usr/bin/python\n".to_string(),
            "from mininet.topo import Topo\n".to_string(),
            format!("class {}(Topo):\n", class_name),
            "\tdef __init__(self):\n".to_string(),
            format!("{}Topo.__init__(self)\n", BODY_INDENT),
        ];

        for section in &self.sections {
            lines.push("\n".to_string());
            lines.push(format!("{}#{}\n", BODY_INDENT, section.title));
            lines.extend(
                section
                    .declarations
                    .iter()
                    .map(|declaration| format!("{}{}\n", BODY_INDENT, declaration)),
            );
        }

        lines.push("\n".to_string());
        lines.push(format!(
            "topos = {{{}: (lambda: {}())}}\n",
            Quoted(&self.name),
            class_name
        ));
        lines
    }

    /// The whole script as one string
    pub fn render(&self) -> String {
        self.render_lines().concat()
    }
}
