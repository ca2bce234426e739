//! The mass-mail and news flows.

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use chrono::Local;
use chrono::NaiveDate;
use commune_lib::i18n::I18n;
use commune_lib::mail::Attachment;
use commune_lib::mail::Draft;
use commune_lib::mail::RecipientKind;
use commune_lib::mail::RecipientQuery;
use commune_lib::mail::collect_recipients;
use commune_lib::mail::send;
use commune_lib::news::NewsFeed;
use commune_lib::news::NewsItem;

use crate::args::MailTarget;
use crate::args::NewsCommand;
use crate::data::DataSet;

/// Previews recipients and mock-sends a mass mail.
pub fn mail(
    data: &DataSet,
    i18n: &I18n,
    target: MailTarget,
    schools: Vec<String>,
    years: Vec<i64>,
    subject: String,
    body: String,
    attachments: Vec<String>,
) -> Result<()> {
    let kind = match target {
        MailTarget::Staff => RecipientKind::Staff,
        MailTarget::Guardians => RecipientKind::Guardians,
        MailTarget::Students => RecipientKind::AdultStudents,
    };
    let query = RecipientQuery {
        kind,
        schools,
        years,
    };

    let recipients =
        collect_recipients(&query, &data.starfsmenn, &data.nemendur, &data.adstandendur);

    println!("{}", i18n.t("postur.titill"));
    println!("{} {}:", recipients.len(), i18n.t("postur.viditakpidar"));
    for recipient in &recipients {
        println!("  {} <{}>", recipient.name, recipient.email);
    }

    let mut draft = Draft::new(subject, body);
    for name in attachments {
        // Attachments travel by name only; no bytes are read here.
        draft = draft.attach(Attachment::new(name, 0));
    }
    if !draft.attachments.is_empty() {
        println!("{}:", i18n.t("postur.vidhengi"));
        for attachment in &draft.attachments {
            println!("  {} ({})", attachment.name, attachment.size_label());
        }
    }

    match send(&draft, &recipients) {
        Ok(report) => {
            println!(
                "{}: {} {}",
                i18n.t("postur.sendaPosta"),
                report.recipient_count,
                i18n.t("postur.viditakpidar")
            );
            Ok(())
        }
        Err(e) => bail!("{e}"),
    }
}

/// Publishes into or lists the demo news feed.
pub fn news(i18n: &I18n, command: NewsCommand) -> Result<()> {
    let mut feed = demo_feed();

    match command {
        NewsCommand::Publish {
            title,
            body,
            from,
            to,
            school,
        } => {
            let mut item = NewsItem::new(title, body, parse_date(&from)?, parse_date(&to)?);
            if !school.is_empty() {
                item = item.for_schools(school);
            }
            let published = feed.publish(item).map_err(anyhow::Error::from)?;
            println!(
                "{}: {} ({} {} - {})",
                i18n.t("frettir.birta"),
                published.title,
                i18n.t("frettir.gildir"),
                published.valid_from,
                published.valid_to
            );
            Ok(())
        }
        NewsCommand::List { date, school } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => Local::now().date_naive(),
            };
            let items = match &school {
                Some(school) => feed.visible_to(school, date),
                None => feed.active_on(date),
            };

            println!("{} ({date})", i18n.t("frettir.titill"));
            if items.is_empty() {
                println!("{}", i18n.t("frettir.engarFrettir"));
                return Ok(());
            }
            for item in items {
                println!(
                    "  {} ({} {} - {})",
                    item.title,
                    i18n.t("frettir.gildir"),
                    item.valid_from,
                    item.valid_to
                );
            }
            Ok(())
        }
    }
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{text}' (expected YYYY-MM-DD)"))
}

/// A couple of seeded articles so the list flow has something to show.
fn demo_feed() -> NewsFeed {
    let mut feed = NewsFeed::new();
    feed.publish(NewsItem::new(
        "Skólasetning haustannar",
        "Skólar sveitarfélagsins verða settir mánudaginn 24. ágúst.",
        NaiveDate::from_ymd_opt(2026, 8, 10).expect("valid date"),
        NaiveDate::from_ymd_opt(2026, 8, 31).expect("valid date"),
    ))
    .expect("demo article is valid");
    feed.publish(
        NewsItem::new(
            "Foreldrafundur í Austurskóla",
            "Foreldrafundur verður haldinn fimmtudaginn 3. september kl. 20.",
            NaiveDate::from_ymd_opt(2026, 8, 24).expect("valid date"),
            NaiveDate::from_ymd_opt(2026, 9, 3).expect("valid date"),
        )
        .for_schools(["Austurskóli"]),
    )
    .expect("demo article is valid");
    feed
}
