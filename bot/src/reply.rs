//! Messages sent back to the invoking chat

use std::fmt;

use anyhow::Result;

/// A titled block inside an [`Embed`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich content attached to a reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub color: Option<u32>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub fields: Vec<Field>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub embed: Option<Embed>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            embed: None,
        }
    }

    pub fn with_embed(content: impl Into<String>, embed: Embed) -> Self {
        Self {
            content: content.into(),
            embed: Some(embed),
        }
    }
}

impl From<String> for Reply {
    fn from(content: String) -> Self {
        Reply::text(content)
    }
}

impl From<&str> for Reply {
    fn from(content: &str) -> Self {
        Reply::text(content)
    }
}

/// Plain-text rendering for terminal transports
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)?;

        let Some(embed) = &self.embed else {
            return Ok(());
        };

        if let Some(url) = embed.thumbnail.as_ref().or(embed.image.as_ref()) {
            write!(f, "\n[sprite] {}", url)?;
        }

        for field in &embed.fields {
            write!(f, "\n┌─ {}", field.name)?;
            for line in field.value.lines() {
                write!(f, "\n│  {}", line)?;
            }
        }

        Ok(())
    }
}

/// Where a command's replies go
pub trait ReplySink {
    fn send(&mut self, reply: Reply) -> Result<()>;
}

/// Collects replies in memory
impl ReplySink for Vec<Reply> {
    fn send(&mut self, reply: Reply) -> Result<()> {
        self.push(reply);
        Ok(())
    }
}
