//! The static translation catalog.
//!
//! One flat table of `(path, icelandic, english)` rows. Lookup is a linear
//! scan; the catalog is small and read rarely.

use super::Language;

/// Resolves a dotted path to its text in `language`.
pub(super) fn lookup(language: Language, path: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(key, _, _)| *key == path)
        .map(|(_, is, en)| match language {
            Language::Is => *is,
            Language::En => *en,
        })
}

/// `(path, icelandic, english)` rows, grouped by section.
static CATALOG: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.yfirlit", "Yfirlit", "Overview"),
    ("nav.skolar", "Skólar", "Schools"),
    ("nav.nemendur", "Nemendur", "Students"),
    ("nav.adstandendur", "Aðstandendur", "Guardians"),
    ("nav.starfsmenn", "Starfsmenn", "Staff"),
    ("nav.vinnuskyrslur", "Vinnuskýrslur", "Work Reports"),
    ("nav.astundun", "Ástundun", "Attendance"),
    ("nav.fjoldapostur", "Fjöldapóstur", "Mass Email"),
    ("nav.frettir", "Fréttir", "News"),
    // Authentication
    ("auth.login", "Innskráning", "Log in"),
    ("auth.logout", "Útskráning", "Log out"),
    ("auth.accessDenied", "Aðgangur bannaður", "Access Denied"),
    (
        "auth.noPermission",
        "Þú hefur ekki heimild til að skoða þessa síðu. Hafðu samband við kerfisstjóra ef þú telur þetta vera villu.",
        "You do not have permission to view this page. Contact an administrator if you believe this is an error.",
    ),
    ("auth.name", "Nafn", "Name"),
    ("auth.email", "Netfang", "Email"),
    ("auth.role", "Hlutverk", "Role"),
    ("auth.roles.admin", "Kerfisstjóri", "System Admin"),
    ("auth.roles.starfsmannastjori", "Starfsmannastjóri", "HR Manager"),
    ("auth.roles.skolaskrifstofa", "Skólaskrifstofa", "School Office"),
    ("auth.roles.samskipti", "Samskiptastjóri", "Communications"),
    // Common
    ("common.leita", "Leita", "Search"),
    ("common.sia", "Sía", "Filter"),
    ("common.hreinsa", "Hreinsa", "Clear"),
    ("common.alpirsiu", "Hreinsa allar síur", "Clear all filters"),
    ("common.allt", "Allt", "All"),
    ("common.flyjaUt", "Flytja út", "Export"),
    ("common.valdir", "valdir", "selected"),
    ("common.veljaAlla", "Velja alla", "Select all"),
    ("common.faerslur", "færslum", "entries"),
    ("common.af", "af", "of"),
    ("common.allirSkolar", "Allir skólar", "All schools"),
    ("common.sveitarfelag", "Sveitarfélag", "Municipality"),
    ("common.excelSkjal", "Excel skjal", "Excel file"),
    // Dashboard
    ("dashboard.titill", "Yfirlit", "Overview"),
    (
        "dashboard.lysing",
        "Samantekt á skólum sveitarfélagsins",
        "Summary of municipality schools",
    ),
    (
        "dashboard.heildarfjoldiNemenda",
        "Heildarfjöldi nemenda",
        "Total students",
    ),
    (
        "dashboard.heildarfjoldiStarfsmanna",
        "Heildarfjöldi starfsmanna",
        "Total staff",
    ),
    ("dashboard.fjoldiSkola", "Fjöldi skóla", "Number of schools"),
    // Schools
    ("skolar.titill", "Skólar", "Schools"),
    (
        "skolar.lysing",
        "Allir skólar sveitarfélagsins",
        "All schools in the municipality",
    ),
    ("skolar.nafn", "Nafn", "Name"),
    ("skolar.nemendafjoldi", "Nemendafj.", "Students"),
    ("skolar.starfsmannafjoldi", "Starfsmennfj.", "Staff"),
    ("skolar.rekstraradili", "Rekstraraðili", "Operator"),
    ("skolar.heimilisfang", "Heimilisfang", "Address"),
    ("skolar.postnumer", "Póstnúmer", "Postal code"),
    ("skolar.simi", "Símanúmer", "Phone"),
    ("skolar.skolastjori", "Skólastjóri", "Principal"),
    ("skolar.netfang", "Netfang", "Email"),
    // Students
    ("nemendur.titill", "Nemendur", "Students"),
    (
        "nemendur.lysing",
        "Allir nemendur í skólum sveitarfélagsins",
        "All students in municipality schools",
    ),
    ("nemendur.kennitala", "Kennitala", "ID number"),
    ("nemendur.nafn", "Nafn", "Name"),
    ("nemendur.heimili", "Heimili", "Address"),
    ("nemendur.netfang", "Netfang", "Email"),
    ("nemendur.skoli", "Skóli", "School"),
    ("nemendur.kyn", "Kyn", "Gender"),
    ("nemendur.argangur", "Árgangur", "Grade"),
    ("nemendur.sveitarfelag", "Sveitarfélag", "Municipality"),
    ("nemendur.allir", "Allir", "All"),
    (
        "nemendur.iHeimasveitarfelagi",
        "Í heimasveitarfélagi",
        "In home municipality",
    ),
    (
        "nemendur.iSkolaAnnarsStadar",
        "Í skóla annars staðar",
        "In school elsewhere",
    ),
    (
        "nemendur.urOdruSveitarfelagi",
        "Úr öðru sveitarfélagi",
        "From other municipality",
    ),
    // Guardians
    ("adstandendur.titill", "Aðstandendur", "Guardians"),
    (
        "adstandendur.lysing",
        "Foreldrar og forráðamenn nemenda",
        "Parents and legal guardians of students",
    ),
    ("adstandendur.kennitala", "Kennitala", "ID number"),
    ("adstandendur.nafn", "Nafn", "Name"),
    ("adstandendur.heimili", "Heimili", "Address"),
    ("adstandendur.netfang", "Netfang", "Email"),
    ("adstandendur.simi", "Símanúmer", "Phone"),
    ("adstandendur.tengsl", "Tengsl", "Relation"),
    ("adstandendur.forsja", "Forsjá", "Custody"),
    ("adstandendur.adaltengilidir", "Aðaltengiliður", "Primary contact"),
    ("adstandendur.farsimi", "Farsími", "Mobile"),
    ("adstandendur.vinnustadur", "Vinnustaður", "Workplace"),
    ("adstandendur.vinnusimi", "Vinnusími", "Work phone"),
    ("adstandendur.nempidar", "Barn", "Child"),
    // Staff
    ("starfsmenn.titill", "Starfsmenn", "Staff"),
    (
        "starfsmenn.lysing",
        "Allir starfsmenn í skólum sveitarfélagsins",
        "All staff in municipality schools",
    ),
    ("starfsmenn.kennitala", "Kennitala", "ID number"),
    ("starfsmenn.nafn", "Nafn", "Name"),
    ("starfsmenn.heimili", "Heimili", "Address"),
    ("starfsmenn.netfang", "Netfang", "Email"),
    ("starfsmenn.simi", "Símanúmer", "Phone"),
    ("starfsmenn.skoli", "Skóli", "School"),
    ("starfsmenn.deild", "Deild", "Department"),
    ("starfsmenn.starfshlutfall", "Starfshlutfall", "Employment %"),
    ("starfsmenn.menntun", "Menntun", "Education"),
    ("starfsmenn.radningardagur", "Ráðningardagur", "Hire date"),
    ("starfsmenn.farsimi", "Farsími", "Mobile"),
    // Work reports
    ("vinnuskyrslur.titill", "Vinnuskýrslur", "Work Reports"),
    (
        "vinnuskyrslur.lysing",
        "Launaupplýsingar starfsmanna úr skólum",
        "Staff salary information from schools",
    ),
    (
        "vinnuskyrslur.synaDalkaflokka",
        "Sýna dálkaflokka:",
        "Show column groups:",
    ),
    (
        "vinnuskyrslur.grunnupplysingar",
        "Grunnupplýsingar",
        "Basic info",
    ),
    (
        "vinnuskyrslur.radningOgLaun",
        "Ráðning og laun",
        "Employment & salary",
    ),
    (
        "vinnuskyrslur.menntunOgReynsla",
        "Menntun og reynsla",
        "Education & experience",
    ),
    ("vinnuskyrslur.kennsla", "Kennsla", "Teaching"),
    ("vinnuskyrslur.yfirvinna", "Yfirvinna", "Overtime"),
    // Attendance
    ("astundun.titill", "Ástundun", "Attendance"),
    (
        "astundun.lysing",
        "Fjarvistir, seint, leyfi og veikindi nemenda",
        "Absences, tardiness, leave and illness of students",
    ),
    ("astundun.nafn", "Nafn", "Name"),
    ("astundun.kennitala", "Kennitala", "ID number"),
    ("astundun.skoli", "Skóli", "School"),
    ("astundun.argangur", "Árgangur", "Grade"),
    ("astundun.manudur", "Mánuður", "Month"),
    ("astundun.fjarvistir", "Fjarvistir", "Absences"),
    ("astundun.seint", "Seint", "Late"),
    ("astundun.leyfi", "Leyfi", "Leave"),
    ("astundun.veikindi", "Veikindi", "Illness"),
    ("astundun.kennslustundir", "Kennslust.", "Classes"),
    ("astundun.maett", "Mætt", "Attended"),
    ("astundun.fjarveraProsen", "Raunmæting %", "Attendance %"),
    ("astundun.nempidar", "Nemendur", "Students"),
    ("astundun.medaltalNem", "Meðaltal/nem.", "Avg/student"),
    ("astundun.flaggadir", "Flaggaðir (>10%)", "Flagged (>10%)"),
    ("astundun.synaFlaggada", "Sýna flaggaða", "Show flagged"),
    (
        "astundun.samantektEftirSkolum",
        "Samantekt eftir skólum",
        "Summary by schools",
    ),
    ("astundun.samtals", "Samtals", "Total"),
    // Mass email
    ("postur.titill", "Fjöldapóstur", "Mass Email"),
    (
        "postur.lysing",
        "Senda tölvupóst til starfsmanna, foreldra eða nemenda",
        "Send email to staff, parents or students",
    ),
    ("postur.sendaPosta", "Senda póst", "Send email"),
    ("postur.starfsmenn", "Starfsmenn", "Staff"),
    ("postur.adstandendur", "Aðstandendur", "Guardians"),
    (
        "postur.nempidarYfir18",
        "Nemendur (yfir 18 ára)",
        "Students (over 18)",
    ),
    ("postur.veljaSkola", "Velja skóla", "Select schools"),
    ("postur.veljaArganga", "Velja árganga", "Select grades"),
    ("postur.allirArgangar", "Allir árgangar", "All grades"),
    ("postur.efni", "Efni", "Subject"),
    ("postur.texti", "Texti", "Message"),
    ("postur.vidhengi", "Viðhengi", "Attachments"),
    ("postur.viditakpidar", "viðtakendur", "recipients"),
    // News
    ("frettir.titill", "Fréttir", "News"),
    ("frettir.lysing", "Senda fréttir til skóla", "Send news to schools"),
    ("frettir.nyFrett", "Ný frétt", "New article"),
    ("frettir.titillFrettar", "Titill", "Title"),
    ("frettir.gildir", "Gildir", "Valid"),
    ("frettir.gildirFra", "Gildir frá", "Valid from"),
    ("frettir.gildirTil", "Gildir til", "Valid until"),
    ("frettir.veljaSkola", "Velja skóla", "Select schools"),
    ("frettir.allirSkolar", "Allir skólar", "All schools"),
    ("frettir.efni", "Efni", "Content"),
    ("frettir.birta", "Birta frétt", "Publish"),
    (
        "frettir.engarFrettir",
        "Engar fréttir hafa verið birtar",
        "No articles have been published",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_languages() {
        assert_eq!(lookup(Language::Is, "nav.skolar"), Some("Skólar"));
        assert_eq!(lookup(Language::En, "nav.skolar"), Some("Schools"));
    }

    #[test]
    fn test_unknown_path_is_none() {
        assert_eq!(lookup(Language::Is, "nav.unknown"), None);
    }

    #[test]
    fn test_catalog_paths_are_unique() {
        for (i, (key, _, _)) in CATALOG.iter().enumerate() {
            assert!(
                !CATALOG[i + 1..].iter().any(|(other, _, _)| other == key),
                "duplicate catalog path: {key}"
            );
        }
    }
}
