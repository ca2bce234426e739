//! Record sources: the built-in Bollabyggð sample data and JSON loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use commune_lib::model::Record;

/// The home municipality.
pub const SVEITARFELAG: &str = "Bollabyggð";

/// Every record set a page can ask for.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub skolar: Vec<Record>,
    pub nemendur: Vec<Record>,
    pub adstandendur: Vec<Record>,
    pub starfsmenn: Vec<Record>,
    pub vinnuskyrslur: Vec<Record>,
    pub astundun: Vec<Record>,
}

impl DataSet {
    /// Loads every record set from `<dir>/<name>.json` files.
    ///
    /// Each file holds a JSON array of flat record objects with an `id`
    /// member. A missing file is an error; the page layer is not invoked
    /// until its records are available.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            skolar: load_records(dir, "skolar")?,
            nemendur: load_records(dir, "nemendur")?,
            adstandendur: load_records(dir, "adstandendur")?,
            starfsmenn: load_records(dir, "starfsmenn")?,
            vinnuskyrslur: load_records(dir, "vinnuskyrslur")?,
            astundun: load_records(dir, "astundun")?,
        })
    }

    /// The built-in sample data for the Bollabyggð installation.
    pub fn sample() -> Self {
        Self {
            skolar: sample_skolar(),
            nemendur: sample_nemendur(),
            adstandendur: sample_adstandendur(),
            starfsmenn: sample_starfsmenn(),
            vinnuskyrslur: sample_vinnuskyrslur(),
            astundun: sample_astundun(),
        }
    }
}

fn load_records(dir: &Path, name: &str) -> Result<Vec<Record>> {
    let path = dir.join(format!("{name}.json"));
    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

fn sample_skolar() -> Vec<Record> {
    vec![
        Record::new("s1")
            .set("nafn", "Austurskóli")
            .set("nemendafjoldi", 320i64)
            .set("starfsmannafjoldi", 42i64)
            .set("skolastjori", "Guðrún Jónsdóttir")
            .set("heimilisfang", "Skólavegur 1")
            .set("postnumer", "810")
            .set("simi", "480-1100")
            .set("netfang", "austurskoli@bollabyggd.is")
            .set("rekstraradili", "Sveitarfélag"),
        Record::new("s2")
            .set("nafn", "Vesturskóli")
            .set("nemendafjoldi", 210i64)
            .set("starfsmannafjoldi", 28i64)
            .set("skolastjori", "Einar Þórsson")
            .set("heimilisfang", "Vesturgata 14")
            .set("postnumer", "811")
            .set("simi", "480-1200")
            .set("netfang", "vesturskoli@bollabyggd.is")
            .set("rekstraradili", "Sveitarfélag"),
        Record::new("s3")
            .set("nafn", "Hlíðaskóli")
            .set("nemendafjoldi", 95i64)
            .set("starfsmannafjoldi", 14i64)
            .set("skolastjori", "Sigríður Pálsdóttir")
            .set("heimilisfang", "Hlíðarendi 3")
            .set("postnumer", "810")
            .set("simi", "480-1300")
            .set("netfang", "hlidaskoli@bollabyggd.is")
            .set("rekstraradili", "Sjálfseignarstofnun"),
    ]
}

fn sample_nemendur() -> Vec<Record> {
    vec![
        nemandi("n1", "Anna Sigurðardóttir", "120112-2390", "Stúlka", 2012, "Austurskóli", SVEITARFELAG, SVEITARFELAG),
        nemandi("n2", "Björn Karlsson", "030513-4410", "Drengur", 2013, "Austurskóli", SVEITARFELAG, SVEITARFELAG),
        nemandi("n3", "Elísabet Þórsdóttir", "220811-5530", "Stúlka", 2011, "Vesturskóli", SVEITARFELAG, SVEITARFELAG),
        nemandi("n4", "Gunnar Pétursson", "140610-6650", "Drengur", 2010, "Vesturskóli", "Árborg", SVEITARFELAG),
        nemandi("n5", "Hildur Jónsdóttir", "011212-7770", "Stúlka", 2012, "Hlíðaskóli", SVEITARFELAG, SVEITARFELAG),
        nemandi("n6", "Ívar Ólafsson", "250909-8890", "Drengur", 2009, "Fjallaskóli", SVEITARFELAG, "Árborg"),
        nemandi("n7", "Jóhanna Anna Egilsdóttir", "180511-9910", "Stúlka", 2011, "Austurskóli", "Ölfus", SVEITARFELAG),
        nemandi("n8", "Kristján Haraldsson", "071013-1030", "Drengur", 2013, "Hlíðaskóli", SVEITARFELAG, SVEITARFELAG),
    ]
}

#[allow(clippy::too_many_arguments)]
fn nemandi(
    id: &str,
    nafn: &str,
    kennitala: &str,
    kyn: &str,
    argangur: i64,
    skoli: &str,
    sveitarfelag: &str,
    sveitarfelag_skola: &str,
) -> Record {
    Record::new(id)
        .set("nafn", nafn)
        .set("kennitala", kennitala)
        .set("kyn", kyn)
        .set("argangur", argangur)
        .set("skoli", skoli)
        .set("sveitarfelag", sveitarfelag)
        .set("sveitarfelag_skola", sveitarfelag_skola)
        .set("heimili", format!("Bollagata {}", &id[1..]))
        .set("netfang", format!("{id}@nemandi.bollabyggd.is"))
}

fn sample_adstandendur() -> Vec<Record> {
    vec![
        adstandandi("a1", "Sigurður Annason", "Faðir", true, vec!["Anna Sigurðardóttir"]),
        adstandandi("a2", "Karl Björnsson", "Faðir", true, vec!["Björn Karlsson"]),
        adstandandi("a3", "Þóra Elísdóttir", "Móðir", true, vec!["Elísabet Þórsdóttir", "Gunnar Pétursson"]),
        adstandandi("a4", "Jón Hildarson", "Afi", false, vec!["Hildur Jónsdóttir"]),
        adstandandi("a5", "Egill Jóhannsson", "Faðir", true, vec!["Jóhanna Anna Egilsdóttir"]),
    ]
}

fn adstandandi(id: &str, nafn: &str, tengsl: &str, forsja: bool, born: Vec<&str>) -> Record {
    Record::new(id)
        .set("nafn", nafn)
        .set("kennitala", format!("0101{}-19{}0", &id[1..], &id[1..]))
        .set("tengsl", tengsl)
        .set("forsja", if forsja { "Já" } else { "Nei" })
        .set("adaltengilid", forsja)
        .set("heimili", format!("Bollagata {}", &id[1..]))
        .set("simi", "555-1000")
        .set("farsimi", "855-1000")
        .set("netfang", format!("{id}@heimili.is"))
        .set("vinnustadur", "Bollabyggð hf.")
        .set("vinnusimi", "555-2000")
}

fn sample_starfsmenn() -> Vec<Record> {
    vec![
        starfsmadur("st1", "Helga Guðmundsdóttir", "Kennari", "Yngsta stig", "Austurskóli", 100, "B.Ed."),
        starfsmadur("st2", "Ólafur Stefánsson", "Kennari", "Miðstig", "Austurskóli", 80, "M.Ed."),
        starfsmadur("st3", "María Kristinsdóttir", "Skólaliði", "Almennt", "Vesturskóli", 100, "Grunnskólapróf"),
        starfsmadur("st4", "Páll Arnarson", "Kennari", "Unglingastig", "Vesturskóli", 100, "B.Ed."),
        starfsmadur("st5", "Rakel Ingadóttir", "Sérkennari", "Sérkennsla", "Hlíðaskóli", 60, "M.Ed."),
        starfsmadur("st6", "Tómas Bergsson", "Húsvörður", "Almennt", "Hlíðaskóli", 100, "Iðnmenntun"),
    ]
}

fn starfsmadur(
    id: &str,
    nafn: &str,
    stada: &str,
    deild: &str,
    skoli: &str,
    hlutfall: i64,
    menntun: &str,
) -> Record {
    Record::new(id)
        .set("nafn", nafn)
        .set("kennitala", format!("0202{}-29{}0", &id[2..], &id[2..]))
        .set("stada", stada)
        .set("deild", deild)
        .set("skoli", skoli)
        .set("starfshlutfall", hlutfall)
        .set("menntun", menntun)
        .set("radningardagur", "2019-08-01")
        .set("heimili", format!("Bollagata {}", &id[2..]))
        .set("netfang", format!("{id}@bollabyggd.is"))
        .set("simi", "555-3000")
        .set("farsimi", "855-3000")
}

fn sample_vinnuskyrslur() -> Vec<Record> {
    vec![
        vinnuskyrsla("v1", "Austurskóli", "Helga Guðmundsdóttir", "Grunnskólakennari", 100, 5, 26.0, 2.5),
        vinnuskyrsla("v2", "Austurskóli", "Ólafur Stefánsson", "Grunnskólakennari", 80, 6, 20.8, 0.0),
        vinnuskyrsla("v3", "Vesturskóli", "Páll Arnarson", "Grunnskólakennari", 100, 5, 26.0, 4.0),
        vinnuskyrsla("v4", "Hlíðaskóli", "Rakel Ingadóttir", "Sérkennari", 60, 7, 15.6, 1.0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn vinnuskyrsla(
    id: &str,
    skoli: &str,
    nafn: &str,
    starfsheiti: &str,
    hlutfall: i64,
    launaflokkur: i64,
    kennsla: f64,
    yfirvinna: f64,
) -> Record {
    Record::new(id)
        .set("nafnSkola", skoli)
        .set("kennitalaSkola", "530269-7609")
        .set("nafn", nafn)
        .set("kennitala", format!("0303{}-39{}0", &id[1..], &id[1..]))
        .set("starfsheitiLauna", starfsheiti)
        .set("radpinahlutfall", hlutfall)
        .set("launahlutfall", hlutfall)
        .set("launaflokkur", launaflokkur)
        .set("grunrodun", launaflokkur + 2)
        .set("personualag", 4i64)
        .set("afslattur", 0i64)
        .set("afslAlls", 0i64)
        .set("profLeyfisbrief", "Já")
        .set("leidbeinandi", "Nei")
        .set("simenntun", 12i64)
        .set("simenntunFerEftir", "Kjarasamningi")
        .set("kennsluferill", 9i64)
        .set("stjornunarreynsla", 0i64)
        .set("allsKennsla", kennsla)
        .set("almennKennsla", kennsla - 2.0)
        .set("onnurKennsla", 2.0)
        .set("serkennsla", 0.0)
        .set("sertaekSerkennsla", 0.0)
        .set("serdeild", 0.0)
        .set("nybuakennsla", 0.0)
        .set("taknmalssvid", 0.0)
        .set("tonmennt", 0.0)
        .set("allsYfirvinna", yfirvinna)
        .set("yfirvinnaAlls", yfirvinna)
}

fn sample_astundun() -> Vec<Record> {
    vec![
        astundun("at1", "n1", "Anna Sigurðardóttir", "Austurskóli", 2012, "September", 160, 156, 2, 1, 0, 1),
        astundun("at2", "n1", "Anna Sigurðardóttir", "Austurskóli", 2012, "Október", 168, 140, 20, 2, 0, 6),
        astundun("at3", "n2", "Björn Karlsson", "Austurskóli", 2013, "September", 160, 158, 0, 1, 1, 0),
        astundun("at4", "n3", "Elísabet Þórsdóttir", "Vesturskóli", 2011, "September", 160, 152, 4, 0, 2, 2),
        astundun("at5", "n4", "Gunnar Pétursson", "Vesturskóli", 2010, "Október", 168, 132, 28, 3, 0, 5),
        astundun("at6", "n5", "Hildur Jónsdóttir", "Hlíðaskóli", 2012, "September", 160, 159, 0, 0, 1, 0),
        astundun("at7", "n8", "Kristján Haraldsson", "Hlíðaskóli", 2013, "Október", 168, 150, 10, 4, 0, 4),
    ]
}

#[allow(clippy::too_many_arguments)]
fn astundun(
    id: &str,
    nemanda_id: &str,
    nafn: &str,
    skoli: &str,
    argangur: i64,
    manudur: &str,
    kennslustundir: i64,
    maett: i64,
    fjarvistir: i64,
    seint: i64,
    leyfi: i64,
    veikindi: i64,
) -> Record {
    Record::new(id)
        .set("nemandaId", nemanda_id)
        .set("nafn", nafn)
        .set("kennitala", "120112-2390")
        .set("skoli", skoli)
        .set("argangur", argangur)
        .set("manudur", manudur)
        .set("kennslustundir", kennslustundir)
        .set("maett", maett)
        .set("fjarvistir", fjarvistir)
        .set("seint", seint)
        .set("leyfi", leyfi)
        .set("veikindi", veikindi)
}
