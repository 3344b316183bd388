//! Catalog data: the RTF 1.9.1 vocabulary plus common vendor extensions.
//!
//! Keys are spelled without the leading backslash. Control symbols use their
//! single character as key (`"~"`, `"{"`, `"\n"`).

use super::{ControlKind, ControlWordDescriptor, FlagEffect};
use crate::destination::SinkId as S;
use crate::property::{PropertyGroup as G, PropertyKey as K};
use phf::phf_map;

const fn suffix_for(name: &str) -> &'static str {
    let bytes = name.as_bytes();
    if !bytes.is_empty() && bytes[0].is_ascii_alphabetic() {
        " "
    } else {
        ""
    }
}

const fn entry(name: &'static str, kind: ControlKind) -> ControlWordDescriptor {
    ControlWordDescriptor {
        name,
        default_parameter: 0,
        pass_default: false,
        kind,
        prefix: "\\",
        suffix: suffix_for(name),
    }
}

const fn defaulted(mut descriptor: ControlWordDescriptor, value: i32) -> ControlWordDescriptor {
    descriptor.default_parameter = value;
    descriptor.pass_default = true;
    descriptor
}

const fn flag(name: &'static str) -> ControlWordDescriptor {
    entry(name, ControlKind::Flag(FlagEffect::None))
}

const fn flag_on(name: &'static str, key: K) -> ControlWordDescriptor {
    entry(name, ControlKind::Flag(FlagEffect::Set(key)))
}

const fn flag_switch(name: &'static str, key: K) -> ControlWordDescriptor {
    entry(name, ControlKind::Flag(FlagEffect::Clearable(key)))
}

const fn flag_assign(name: &'static str, key: K, value: i32) -> ControlWordDescriptor {
    entry(name, ControlKind::Flag(FlagEffect::Assign(key, value)))
}

const fn flag_reset(name: &'static str, group: G) -> ControlWordDescriptor {
    entry(name, ControlKind::Flag(FlagEffect::Reset(group)))
}

const fn value(name: &'static str) -> ControlWordDescriptor {
    entry(name, ControlKind::Value(None))
}

const fn value_of(name: &'static str, key: K) -> ControlWordDescriptor {
    entry(name, ControlKind::Value(Some(key)))
}

const fn value_def(name: &'static str, key: K, default: i32) -> ControlWordDescriptor {
    defaulted(value_of(name, key), default)
}

const fn value_with_default(name: &'static str, default: i32) -> ControlWordDescriptor {
    defaulted(value(name), default)
}

const fn toggle(name: &'static str) -> ControlWordDescriptor {
    entry(name, ControlKind::Toggle(None))
}

const fn toggle_of(name: &'static str, key: K) -> ControlWordDescriptor {
    entry(name, ControlKind::Toggle(Some(key)))
}

const fn symbol(name: &'static str, text: &'static str) -> ControlWordDescriptor {
    entry(name, ControlKind::Symbol(text))
}

const fn dest(name: &'static str, sink: S) -> ControlWordDescriptor {
    entry(name, ControlKind::Destination(sink))
}

const fn dest_named(name: &'static str) -> ControlWordDescriptor {
    dest(name, S::Named(name))
}

const fn dest_ex(name: &'static str, sink: S) -> ControlWordDescriptor {
    let mut descriptor = entry(name, ControlKind::DestinationEx(sink));
    descriptor.prefix = "\\*\\";
    descriptor
}

const fn dest_ex_named(name: &'static str) -> ControlWordDescriptor {
    dest_ex(name, S::Named(name))
}

pub(super) static CONTROL_WORDS: phf::Map<&'static str, ControlWordDescriptor> = phf_map! {
    // Document header
    "rtf" => dest("rtf", S::Document),
    "ansi" => flag_assign("ansi", K::CharacterSet, 0),
    "mac" => flag_assign("mac", K::CharacterSet, 1),
    "pc" => flag_assign("pc", K::CharacterSet, 2),
    "pca" => flag_assign("pca", K::CharacterSet, 3),
    "ansicpg" => value_of("ansicpg", K::AnsiCodePage),
    "deff" => value_of("deff", K::DefaultFont),
    "adeff" => value("adeff"),
    "stshfdbch" => value("stshfdbch"),
    "stshfloch" => value("stshfloch"),
    "stshfhich" => value("stshfhich"),
    "stshfbi" => value("stshfbi"),
    "deflang" => value_of("deflang", K::DefaultLanguage),
    "deflangfe" => value("deflangfe"),
    "adeflang" => value("adeflang"),
    "uc" => value_def("uc", K::UnicodeSkip, 1),
    "u" => value_of("u", K::UnicodeChar),
    "upr" => flag("upr"),
    "ud" => dest_ex_named("ud"),
    "fonttbl" => dest("fonttbl", S::FontTable),
    "colortbl" => dest("colortbl", S::ColorTable),
    "stylesheet" => dest("stylesheet", S::StyleSheet),
    "info" => dest("info", S::Info),
    "listtable" => dest_ex("listtable", S::ListTable),
    "listoverridetable" => dest_ex("listoverridetable", S::ListOverrideTable),
    "filetbl" => dest_ex_named("filetbl"),
    "file" => dest_named("file"),
    "revtbl" => dest_named("revtbl"),
    "rsidtbl" => dest_ex_named("rsidtbl"),
    "rsid" => value("rsid"),
    "rsidroot" => value("rsidroot"),
    "insrsid" => value("insrsid"),
    "charrsid" => value("charrsid"),
    "delrsid" => value("delrsid"),
    "pararsid" => value("pararsid"),
    "sectrsid" => value("sectrsid"),
    "tblrsid" => value("tblrsid"),
    "styrsid" => value("styrsid"),
    "generator" => dest_ex("generator", S::Info),
    "xmlnstbl" => dest_ex_named("xmlnstbl"),
    "xmlns" => value("xmlns"),
    "xmlopen" => dest_ex_named("xmlopen"),
    "xmlclose" => dest_ex_named("xmlclose"),
    "xmlname" => dest_ex_named("xmlname"),
    "xmlattr" => flag("xmlattr"),
    "xmlattrname" => dest_ex_named("xmlattrname"),
    "xmlattrvalue" => dest_ex_named("xmlattrvalue"),
    "xmlattrns" => value("xmlattrns"),
    "mmathPr" => dest_ex_named("mmathPr"),
    "defchp" => dest_ex_named("defchp"),
    "defpap" => dest_ex_named("defpap"),
    "latentstyles" => dest_ex_named("latentstyles"),
    "lsdlockedexcept" => dest_ex_named("lsdlockedexcept"),
    "lsdlockeddef" => value("lsdlockeddef"),
    "lsdlocked" => value("lsdlocked"),
    "lsdpriority" => value("lsdpriority"),
    "lsdprioritydef" => value("lsdprioritydef"),
    "lsdqformat" => value("lsdqformat"),
    "lsdqformatdef" => value("lsdqformatdef"),
    "lsdsemihidden" => value("lsdsemihidden"),
    "lsdsemihiddendef" => value("lsdsemihiddendef"),
    "lsdunhideused" => value("lsdunhideused"),
    "lsdunhideuseddef" => value("lsdunhideuseddef"),
    "lsdstimax" => value("lsdstimax"),
    "themedata" => dest_ex_named("themedata"),
    "colorschememapping" => dest_ex_named("colorschememapping"),
    "datastore" => dest_ex_named("datastore"),
    "pgdsctbl" => dest_ex_named("pgdsctbl"),
    "pgdsc" => value("pgdsc"),
    "pgdscuse" => value("pgdscuse"),
    "pgdscnxt" => value("pgdscnxt"),
    "pgdscno" => value("pgdscno"),
    "protusertbl" => dest_ex_named("protusertbl"),
    "wgrffmtfilter" => dest_ex_named("wgrffmtfilter"),
    "fchars" => dest_ex_named("fchars"),
    "lchars" => dest_ex_named("lchars"),
    "docvar" => dest_ex_named("docvar"),
    "private" => dest_ex_named("private"),
    "nouicompat" => flag("nouicompat"),
    "viewkind" => value("viewkind"),
    "viewscale" => value("viewscale"),
    "viewzk" => value("viewzk"),
    "viewbksp" => value("viewbksp"),
    "viewnobound" => flag("viewnobound"),
    "fromtext" => flag("fromtext"),
    "fromhtml" => value("fromhtml"),
    "htmlrtf" => toggle("htmlrtf"),
    "htmltag" => value("htmltag"),
    "mhtmltag" => value("mhtmltag"),
    "htmlbase" => flag("htmlbase"),
    "userprops" => dest_ex_named("userprops"),
    "propname" => dest_named("propname"),
    "staticval" => dest_named("staticval"),
    "linkval" => dest_named("linkval"),
    "proptype" => value("proptype"),

    // Apple and other vendor extensions
    "cocoartf" => value("cocoartf"),
    "cocoasubrtf" => value("cocoasubrtf"),
    "cocoatextscaling" => value("cocoatextscaling"),
    "cocoaplatform" => value("cocoaplatform"),
    "cocoascreenfonts" => value("cocoascreenfonts"),
    "expandedcolortbl" => dest_ex_named("expandedcolortbl"),
    "cssrgb" => flag("cssrgb"),
    "csgray" => value("csgray"),
    "csgenericrgb" => flag("csgenericrgb"),
    "vieww" => value("vieww"),
    "viewh" => value("viewh"),
    "pardirnatural" => flag("pardirnatural"),
    "partightenfactor" => value("partightenfactor"),
    "slleading" => value("slleading"),
    "slmaximum" => value("slmaximum"),
    "slminimum" => value("slminimum"),
    "readonlydoc" => value("readonlydoc"),
    "NeXTGraphic" => dest_named("NeXTGraphic"),
    "width" => value("width"),
    "height" => value("height"),
    "levelmarker" => dest_ex_named("levelmarker"),
    "AppleTypeServices" => flag("AppleTypeServices"),
    "AppleTypeServicesU1" => flag("AppleTypeServicesU1"),
    "ApplyBrkRules" => flag("ApplyBrkRules"),
    "outl0strokewidth" => value("outl0strokewidth"),
    "strokec" => value("strokec"),
    "strokewidth" => value("strokewidth"),

    // Document information
    "title" => dest("title", S::Info),
    "subject" => dest("subject", S::Info),
    "author" => dest("author", S::Info),
    "manager" => dest("manager", S::Info),
    "company" => dest("company", S::Info),
    "operator" => dest("operator", S::Info),
    "category" => dest("category", S::Info),
    "keywords" => dest("keywords", S::Info),
    "comment" => dest("comment", S::Info),
    "doccomm" => dest("doccomm", S::Info),
    "hlinkbase" => dest("hlinkbase", S::Info),
    "creatim" => dest("creatim", S::Info),
    "revtim" => dest("revtim", S::Info),
    "printim" => dest("printim", S::Info),
    "buptim" => dest("buptim", S::Info),
    "yr" => value("yr"),
    "mo" => value("mo"),
    "dy" => value("dy"),
    "hr" => value("hr"),
    "min" => value("min"),
    "sec" => value("sec"),
    "version" => value("version"),
    "vern" => value("vern"),
    "edmins" => value("edmins"),
    "nofpages" => value("nofpages"),
    "nofwords" => value("nofwords"),
    "nofchars" => value("nofchars"),
    "nofcharsws" => value("nofcharsws"),
    "id" => value("id"),
    "password" => dest_ex("password", S::Info),
    "passwordhash" => dest_ex_named("passwordhash"),

    // Document formatting
    "deftab" => value_of("deftab", K::DefaultTab),
    "hyphhotz" => value("hyphhotz"),
    "hyphconsec" => value("hyphconsec"),
    "hyphcaps" => toggle("hyphcaps"),
    "hyphauto" => toggle("hyphauto"),
    "linestart" => value("linestart"),
    "fracwidth" => flag("fracwidth"),
    "nextfile" => dest_named("nextfile"),
    "template" => dest_named("template"),
    "makebackup" => flag("makebackup"),
    "defformat" => flag("defformat"),
    "psover" => flag("psover"),
    "doctemp" => flag("doctemp"),
    "windowcaption" => dest_ex_named("windowcaption"),
    "doctype" => value("doctype"),
    "ilfomacatclnup" => value("ilfomacatclnup"),
    "horzdoc" => flag("horzdoc"),
    "vertdoc" => flag("vertdoc"),
    "jcompress" => flag("jcompress"),
    "jexpand" => flag("jexpand"),
    "lnongrid" => flag("lnongrid"),
    "grfdocevents" => value("grfdocevents"),
    "themelang" => value("themelang"),
    "themelangfe" => value("themelangfe"),
    "themelangcs" => value("themelangcs"),
    "relyonvml" => value("relyonvml"),
    "validatexml" => value("validatexml"),
    "donotembedsysfont" => value("donotembedsysfont"),
    "donotembedlingdata" => value("donotembedlingdata"),
    "showplaceholdtext" => value("showplaceholdtext"),
    "trackmoves" => value("trackmoves"),
    "trackformatting" => value("trackformatting"),
    "ignoremixedcontent" => value("ignoremixedcontent"),
    "saveinvalidxml" => value("saveinvalidxml"),
    "showxmlerrors" => value("showxmlerrors"),
    "stylelocktheme" => flag("stylelocktheme"),
    "stylelockqfset" => flag("stylelockqfset"),
    "stylelock" => flag("stylelock"),
    "stylelockenforced" => flag("stylelockenforced"),
    "stylelockbackcomp" => flag("stylelockbackcomp"),
    "stylesortmethod" => value("stylesortmethod"),
    "usenormstyforlist" => flag("usenormstyforlist"),
    "noxlattoyen" => flag("noxlattoyen"),
    "expshrtn" => flag("expshrtn"),
    "noultrlspc" => flag("noultrlspc"),
    "dntblnsbdb" => flag("dntblnsbdb"),
    "nospaceforul" => flag("nospaceforul"),
    "formshade" => flag("formshade"),
    "formdisp" => flag("formdisp"),
    "paperw" => value_of("paperw", K::PaperWidth),
    "paperh" => value_of("paperh", K::PaperHeight),
    "psz" => value("psz"),
    "margl" => value_of("margl", K::MarginLeft),
    "margr" => value_of("margr", K::MarginRight),
    "margt" => value_of("margt", K::MarginTop),
    "margb" => value_of("margb", K::MarginBottom),
    "facingp" => flag_on("facingp", K::FacingPages),
    "gutter" => value_of("gutter", K::Gutter),
    "ogutter" => value("ogutter"),
    "rtlgutter" => flag("rtlgutter"),
    "gutterprl" => flag("gutterprl"),
    "margmirror" => flag("margmirror"),
    "landscape" => flag_on("landscape", K::Landscape),
    "pgnstart" => value("pgnstart"),
    "widowctrl" => flag("widowctrl"),
    "twoonone" => flag("twoonone"),
    "bookfold" => flag("bookfold"),
    "bookfoldrev" => flag("bookfoldrev"),
    "bookfoldsheets" => value("bookfoldsheets"),
    "linkstyles" => flag("linkstyles"),
    "notabind" => flag("notabind"),
    "wraptrsp" => flag("wraptrsp"),
    "prcolbl" => flag("prcolbl"),
    "noextrasprl" => flag("noextrasprl"),
    "nocolbal" => flag("nocolbal"),
    "cvmme" => flag("cvmme"),
    "sprstsp" => flag("sprstsp"),
    "sprsspbf" => flag("sprsspbf"),
    "otblrul" => flag("otblrul"),
    "transmf" => flag("transmf"),
    "swpbdr" => flag("swpbdr"),
    "brkfrm" => flag("brkfrm"),
    "sprslnsp" => flag("sprslnsp"),
    "subfontbysize" => flag("subfontbysize"),
    "truncatefontheight" => flag("truncatefontheight"),
    "truncex" => flag("truncex"),
    "bdbfhdr" => flag("bdbfhdr"),
    "lytexcttp" => flag("lytexcttp"),
    "lytprtmet" => flag("lytprtmet"),
    "msmcap" => flag("msmcap"),
    "nolead" => flag("nolead"),
    "sprsbsp" => flag("sprsbsp"),
    "sprstsm" => flag("sprstsm"),
    "lytcalctblwd" => flag("lytcalctblwd"),
    "oldas" => flag("oldas"),
    "oldlinewrap" => flag("oldlinewrap"),
    "alntblind" => flag("alntblind"),
    "nobrkwrptbl" => flag("nobrkwrptbl"),
    "useltbaln" => flag("useltbaln"),
    "wpjst" => flag("wpjst"),
    "wpsp" => flag("wpsp"),
    "splytwnine" => flag("splytwnine"),
    "ftnlytwnine" => flag("ftnlytwnine"),
    "htmautsp" => flag("htmautsp"),
    "lnbrkrule" => flag("lnbrkrule"),
    "asianbrkrule" => flag("asianbrkrule"),
    "allowfieldendsel" => flag("allowfieldendsel"),
    "nojkernpunct" => flag("nojkernpunct"),
    "nocxsptable" => flag("nocxsptable"),
    "nogrowautofit" => flag("nogrowautofit"),
    "indrlsweleven" => flag("indrlsweleven"),
    "snaptogridincell" => flag("snaptogridincell"),
    "toplinepunct" => flag("toplinepunct"),
    "rempersonalinfo" => flag("rempersonalinfo"),
    "remdttm" => flag("remdttm"),
    "dgmargin" => flag("dgmargin"),
    "dghspace" => value("dghspace"),
    "dgvspace" => value("dgvspace"),
    "dghorigin" => value("dghorigin"),
    "dgvorigin" => value("dgvorigin"),
    "dghshow" => value("dghshow"),
    "dgvshow" => value("dgvshow"),
    "dgsnap" => flag("dgsnap"),
    "allprot" => flag("allprot"),
    "annotprot" => flag("annotprot"),
    "formprot" => flag("formprot"),
    "revprot" => flag("revprot"),
    "readprot" => flag("readprot"),
    "protlevel" => value("protlevel"),
    "enforceprot" => value("enforceprot"),
    "readonlyrecommended" => flag("readonlyrecommended"),
    "revisions" => flag("revisions"),
    "revprop" => value("revprop"),
    "revbar" => value("revbar"),
    "fet" => value("fet"),
    "pgbrdrhead" => flag("pgbrdrhead"),
    "pgbrdrfoot" => flag("pgbrdrfoot"),
    "pgbrdrt" => flag("pgbrdrt"),
    "pgbrdrb" => flag("pgbrdrb"),
    "pgbrdrl" => flag("pgbrdrl"),
    "pgbrdrr" => flag("pgbrdrr"),
    "brdrart" => value("brdrart"),
    "pgbrdropt" => value("pgbrdropt"),
    "pgbrdrsnap" => flag("pgbrdrsnap"),
    "nolnhtadjtbl" => flag("nolnhtadjtbl"),
    "rtldoc" => flag("rtldoc"),
    "ltrdoc" => flag("ltrdoc"),
    "hwelev" => flag("hwelev"),
    "krnprsnet" => flag("krnprsnet"),
    "jsksu" => flag("jsksu"),
    "ksulang" => value("ksulang"),

    // Footnotes and endnotes
    "ftnbj" => flag("ftnbj"),
    "ftntj" => flag("ftntj"),
    "ftnstart" => value_of("ftnstart", K::FootnoteStart),
    "ftnrstpg" => flag("ftnrstpg"),
    "ftnrestart" => flag("ftnrestart"),
    "ftnrstcont" => flag("ftnrstcont"),
    "ftnrscont" => flag("ftnrscont"),
    "ftnnar" => flag("ftnnar"),
    "ftnnalc" => flag("ftnnalc"),
    "ftnnauc" => flag("ftnnauc"),
    "ftnnrlc" => flag("ftnnrlc"),
    "ftnnruc" => flag("ftnnruc"),
    "ftnnchi" => flag("ftnnchi"),
    "ftnnchosung" => flag("ftnnchosung"),
    "ftnncnum" => flag("ftnncnum"),
    "ftnndbnum" => flag("ftnndbnum"),
    "ftnndbnumd" => flag("ftnndbnumd"),
    "ftnndbnumt" => flag("ftnndbnumt"),
    "ftnndbnumk" => flag("ftnndbnumk"),
    "ftnndbar" => flag("ftnndbar"),
    "ftnnganada" => flag("ftnnganada"),
    "ftnngbnum" => flag("ftnngbnum"),
    "ftnngbnumd" => flag("ftnngbnumd"),
    "ftnngbnuml" => flag("ftnngbnuml"),
    "ftnngbnumk" => flag("ftnngbnumk"),
    "ftnnzodiac" => flag("ftnnzodiac"),
    "ftnnzodiacd" => flag("ftnnzodiacd"),
    "ftnnzodiacl" => flag("ftnnzodiacl"),
    "aenddoc" => flag("aenddoc"),
    "aendnotes" => flag("aendnotes"),
    "aftnbj" => flag("aftnbj"),
    "aftntj" => flag("aftntj"),
    "aftnstart" => value("aftnstart"),
    "aftnrestart" => flag("aftnrestart"),
    "aftnrstcont" => flag("aftnrstcont"),
    "aftnnar" => flag("aftnnar"),
    "aftnnalc" => flag("aftnnalc"),
    "aftnnauc" => flag("aftnnauc"),
    "aftnnrlc" => flag("aftnnrlc"),
    "aftnnruc" => flag("aftnnruc"),
    "aftnnchi" => flag("aftnnchi"),
    "aftnnchosung" => flag("aftnnchosung"),
    "aftnncnum" => flag("aftnncnum"),
    "aftnndbnum" => flag("aftnndbnum"),
    "aftnndbnumd" => flag("aftnndbnumd"),
    "aftnndbnumt" => flag("aftnndbnumt"),
    "aftnndbnumk" => flag("aftnndbnumk"),
    "aftnndbar" => flag("aftnndbar"),
    "aftnnganada" => flag("aftnnganada"),
    "aftnngbnum" => flag("aftnngbnum"),
    "aftnngbnumd" => flag("aftnngbnumd"),
    "aftnngbnuml" => flag("aftnngbnuml"),
    "aftnngbnumk" => flag("aftnngbnumk"),
    "aftnnzodiac" => flag("aftnnzodiac"),
    "aftnnzodiacd" => flag("aftnnzodiacd"),
    "aftnnzodiacl" => flag("aftnnzodiacl"),
    "enddoc" => flag("enddoc"),
    "endnotes" => flag("endnotes"),
    "endnhere" => flag("endnhere"),
    "ftnsep" => dest_named("ftnsep"),
    "ftnsepc" => dest_named("ftnsepc"),
    "ftncn" => dest_named("ftncn"),
    "aftnsep" => dest_named("aftnsep"),
    "aftnsepc" => dest_named("aftnsepc"),
    "aftncn" => dest_named("aftncn"),
    "footnote" => dest_named("footnote"),
    "ftnalt" => flag("ftnalt"),
    "chftn" => flag("chftn"),
    "chftnsep" => flag("chftnsep"),
    "chftnsepc" => flag("chftnsepc"),

    // Section formatting
    "sect" => symbol("sect", "\n"),
    "sectd" => flag_reset("sectd", G::Section),
    "binfsxn" => value("binfsxn"),
    "binsxn" => value("binsxn"),
    "pnseclvl" => value("pnseclvl"),
    "sectunlocked" => flag("sectunlocked"),
    "sbknone" => flag_assign("sbknone", K::SectionBreak, 0),
    "sbkcol" => flag_assign("sbkcol", K::SectionBreak, 1),
    "sbkpage" => flag_assign("sbkpage", K::SectionBreak, 2),
    "sbkeven" => flag_assign("sbkeven", K::SectionBreak, 3),
    "sbkodd" => flag_assign("sbkodd", K::SectionBreak, 4),
    "cols" => value_of("cols", K::Columns),
    "colsx" => value("colsx"),
    "colno" => value("colno"),
    "colsr" => value("colsr"),
    "colw" => value("colw"),
    "linebetcol" => flag("linebetcol"),
    "linemod" => value("linemod"),
    "linex" => value("linex"),
    "linestarts" => value("linestarts"),
    "linerestart" => flag("linerestart"),
    "lineppage" => flag("lineppage"),
    "linecont" => flag("linecont"),
    "pgwsxn" => value("pgwsxn"),
    "pghsxn" => value("pghsxn"),
    "marglsxn" => value("marglsxn"),
    "margrsxn" => value("margrsxn"),
    "margtsxn" => value("margtsxn"),
    "margbsxn" => value("margbsxn"),
    "guttersxn" => value("guttersxn"),
    "margmirsxn" => flag("margmirsxn"),
    "lndscpsxn" => flag_on("lndscpsxn", K::SectionLandscape),
    "titlepg" => flag_on("titlepg", K::TitlePage),
    "headery" => value("headery"),
    "footery" => value("footery"),
    "pgnstarts" => value_of("pgnstarts", K::PageNumberStart),
    "pgncont" => flag("pgncont"),
    "pgnrestart" => flag_on("pgnrestart", K::PageNumberRestart),
    "pgnx" => value("pgnx"),
    "pgny" => value("pgny"),
    "pgndec" => flag("pgndec"),
    "pgnucrm" => flag("pgnucrm"),
    "pgnlcrm" => flag("pgnlcrm"),
    "pgnucltr" => flag("pgnucltr"),
    "pgnlcltr" => flag("pgnlcltr"),
    "pgnbidia" => flag("pgnbidia"),
    "pgnbidib" => flag("pgnbidib"),
    "pgnchosung" => flag("pgnchosung"),
    "pgncnum" => flag("pgncnum"),
    "pgndbnum" => flag("pgndbnum"),
    "pgndbnumd" => flag("pgndbnumd"),
    "pgndbnumt" => flag("pgndbnumt"),
    "pgndbnumk" => flag("pgndbnumk"),
    "pgndecd" => flag("pgndecd"),
    "pgnganada" => flag("pgnganada"),
    "pgngbnum" => flag("pgngbnum"),
    "pgngbnumd" => flag("pgngbnumd"),
    "pgngbnuml" => flag("pgngbnuml"),
    "pgngbnumk" => flag("pgngbnumk"),
    "pgnzodiac" => flag("pgnzodiac"),
    "pgnzodiacd" => flag("pgnzodiacd"),
    "pgnzodiacl" => flag("pgnzodiacl"),
    "pgnhn" => value("pgnhn"),
    "pgnhnsh" => flag("pgnhnsh"),
    "pgnhnsp" => flag("pgnhnsp"),
    "pgnhnsc" => flag("pgnhnsc"),
    "pgnhnsm" => flag("pgnhnsm"),
    "pgnhnsn" => flag("pgnhnsn"),
    "pgnid" => flag("pgnid"),
    "vertalt" => flag("vertalt"),
    "vertalb" => flag("vertalb"),
    "vertalc" => flag("vertalc"),
    "vertalj" => flag("vertalj"),
    "rtlsect" => flag("rtlsect"),
    "ltrsect" => flag("ltrsect"),
    "sectexpand" => value("sectexpand"),
    "sectlinegrid" => value("sectlinegrid"),
    "sectdefaultcl" => flag("sectdefaultcl"),
    "sectspecifycl" => flag("sectspecifycl"),
    "sectspecifyl" => flag("sectspecifyl"),
    "sectspecifygenN" => flag("sectspecifygenN"),
    "stextflow" => value("stextflow"),
    "srauth" => value("srauth"),
    "srdate" => value("srdate"),
    "header" => dest_named("header"),
    "footer" => dest_named("footer"),
    "headerl" => dest_named("headerl"),
    "headerr" => dest_named("headerr"),
    "headerf" => dest_named("headerf"),
    "footerl" => dest_named("footerl"),
    "footerr" => dest_named("footerr"),
    "footerf" => dest_named("footerf"),
    "sectnum" => flag("sectnum"),

    // Paragraph formatting
    "par" => symbol("par", "\n"),
    "pard" => flag_reset("pard", G::Paragraph),
    "s" => value_of("s", K::ParagraphStyle),
    "hyphpar" => toggle("hyphpar"),
    "intbl" => flag_switch("intbl", K::InTable),
    "itap" => value_of("itap", K::TableDepth),
    "keep" => flag_on("keep", K::KeepTogether),
    "keepn" => flag_on("keepn", K::KeepWithNext),
    "level" => value("level"),
    "noline" => flag("noline"),
    "nowidctlpar" => flag_assign("nowidctlpar", K::WidowControl, 0),
    "widctlpar" => flag_assign("widctlpar", K::WidowControl, 1),
    "outlinelevel" => value_of("outlinelevel", K::OutlineLevel),
    "pagebb" => flag_on("pagebb", K::PageBreakBefore),
    "sbys" => flag("sbys"),
    "ql" => flag_assign("ql", K::Alignment, 0),
    "qr" => flag_assign("qr", K::Alignment, 1),
    "qc" => flag_assign("qc", K::Alignment, 2),
    "qj" => flag_assign("qj", K::Alignment, 3),
    "qd" => flag_assign("qd", K::Alignment, 4),
    "qk" => value("qk"),
    "qt" => flag("qt"),
    "fi" => value_of("fi", K::FirstLineIndent),
    "li" => value_of("li", K::LeftIndent),
    "ri" => value_of("ri", K::RightIndent),
    "lin" => value("lin"),
    "rin" => value("rin"),
    "cufi" => value("cufi"),
    "culi" => value("culi"),
    "curi" => value("curi"),
    "adjustright" => flag("adjustright"),
    "sb" => value_of("sb", K::SpaceBefore),
    "sa" => value_of("sa", K::SpaceAfter),
    "sl" => value_of("sl", K::LineSpacing),
    "slmult" => flag_switch("slmult", K::LineMultiple),
    "sbauto" => value("sbauto"),
    "saauto" => value("saauto"),
    "lisb" => value("lisb"),
    "lisa" => value("lisa"),
    "nosnaplinegrid" => flag("nosnaplinegrid"),
    "contextualspace" => flag("contextualspace"),
    "spv" => flag("spv"),
    "faauto" => flag("faauto"),
    "fahang" => flag("fahang"),
    "facenter" => flag("facenter"),
    "faroman" => flag("faroman"),
    "favar" => flag("favar"),
    "fafixed" => flag("fafixed"),
    "rtlpar" => flag_on("rtlpar", K::RightToLeft),
    "ltrpar" => flag_assign("ltrpar", K::RightToLeft, 0),
    "nowwrap" => flag("nowwrap"),
    "aspalpha" => toggle("aspalpha"),
    "aspnum" => toggle("aspnum"),
    "collapsed" => flag("collapsed"),
    "nooverflow" => flag("nooverflow"),
    "yts" => value("yts"),
    "tx" => value("tx"),
    "tb" => value("tb"),
    "tqr" => flag("tqr"),
    "tqc" => flag("tqc"),
    "tqdec" => flag("tqdec"),
    "tldot" => flag("tldot"),
    "tlhyph" => flag("tlhyph"),
    "tlul" => flag("tlul"),
    "tlth" => flag("tlth"),
    "tleq" => flag("tleq"),
    "tlmdot" => flag("tlmdot"),
    "jclisttab" => flag("jclisttab"),
    "ls" => value_of("ls", K::ListOverride),
    "ilvl" => value_of("ilvl", K::ListLevel),
    "listtext" => dest_named("listtext"),
    "pntext" => dest_named("pntext"),
    "pn" => dest_named("pn"),
    "pnlvl" => value("pnlvl"),
    "pnlvlblt" => flag("pnlvlblt"),
    "pnlvlbody" => flag("pnlvlbody"),
    "pnlvlcont" => flag("pnlvlcont"),
    "pnnumonce" => flag("pnnumonce"),
    "pnacross" => flag("pnacross"),
    "pnhang" => flag("pnhang"),
    "pnrestart" => flag("pnrestart"),
    "pncard" => flag("pncard"),
    "pndec" => flag("pndec"),
    "pnucltr" => flag("pnucltr"),
    "pnucrm" => flag("pnucrm"),
    "pnlcltr" => flag("pnlcltr"),
    "pnlcrm" => flag("pnlcrm"),
    "pnord" => flag("pnord"),
    "pnordt" => flag("pnordt"),
    "pnstart" => value("pnstart"),
    "pnindent" => value("pnindent"),
    "pnsp" => value("pnsp"),
    "pnprev" => flag("pnprev"),
    "pnqc" => flag("pnqc"),
    "pnql" => flag("pnql"),
    "pnqr" => flag("pnqr"),
    "pntxta" => dest_named("pntxta"),
    "pntxtb" => dest_named("pntxtb"),
    "pnb" => toggle("pnb"),
    "pni" => toggle("pni"),
    "pncaps" => toggle("pncaps"),
    "pnscaps" => toggle("pnscaps"),
    "pnul" => toggle("pnul"),
    "pnuld" => flag("pnuld"),
    "pnuldb" => flag("pnuldb"),
    "pnulnone" => flag("pnulnone"),
    "pnulw" => flag("pnulw"),
    "pnuldash" => flag("pnuldash"),
    "pnuldashd" => flag("pnuldashd"),
    "pnuldashdd" => flag("pnuldashdd"),
    "pnulhair" => flag("pnulhair"),
    "pnulth" => flag("pnulth"),
    "pnulwave" => flag("pnulwave"),
    "pnstrike" => toggle("pnstrike"),
    "pncf" => value("pncf"),
    "pnf" => value("pnf"),
    "pnfs" => value("pnfs"),
    "pnrnot" => flag("pnrnot"),
    "pnganada" => flag("pnganada"),
    "pngbnum" => flag("pngbnum"),
    "pnaiu" => flag("pnaiu"),
    "pnaiud" => flag("pnaiud"),
    "pnchosung" => flag("pnchosung"),
    "pncnum" => flag("pncnum"),
    "pndbnum" => flag("pndbnum"),
    "pndecd" => flag("pndecd"),
    "pnzodiac" => flag("pnzodiac"),
    "pnrauth" => value("pnrauth"),
    "pnrdate" => value("pnrdate"),
    "pnrxst" => value("pnrxst"),
    "pnrpnbr" => value("pnrpnbr"),
    "pnrrgb" => value("pnrrgb"),
    "pnrnfc" => value("pnrnfc"),
    "pnrstart" => value("pnrstart"),
    "pnrstop" => value("pnrstop"),

    // Borders and shading
    "brdrt" => flag("brdrt"),
    "brdrb" => flag("brdrb"),
    "brdrl" => flag("brdrl"),
    "brdrr" => flag("brdrr"),
    "brdrbtw" => flag("brdrbtw"),
    "brdrbar" => flag("brdrbar"),
    "box" => flag("box"),
    "brdrs" => flag("brdrs"),
    "brdrth" => flag("brdrth"),
    "brdrsh" => flag("brdrsh"),
    "brdrdb" => flag("brdrdb"),
    "brdrdot" => flag("brdrdot"),
    "brdrdash" => flag("brdrdash"),
    "brdrhair" => flag("brdrhair"),
    "brdrinset" => flag("brdrinset"),
    "brdrdashsm" => flag("brdrdashsm"),
    "brdrdashd" => flag("brdrdashd"),
    "brdrdashdd" => flag("brdrdashdd"),
    "brdrdashdot" => flag("brdrdashdot"),
    "brdrdashdotdot" => flag("brdrdashdotdot"),
    "brdroutset" => flag("brdroutset"),
    "brdrtriple" => flag("brdrtriple"),
    "brdrtnthsg" => flag("brdrtnthsg"),
    "brdrthtnsg" => flag("brdrthtnsg"),
    "brdrtnthtnsg" => flag("brdrtnthtnsg"),
    "brdrtnthmg" => flag("brdrtnthmg"),
    "brdrthtnmg" => flag("brdrthtnmg"),
    "brdrtnthtnmg" => flag("brdrtnthtnmg"),
    "brdrtnthlg" => flag("brdrtnthlg"),
    "brdrthtnlg" => flag("brdrthtnlg"),
    "brdrtnthtnlg" => flag("brdrtnthtnlg"),
    "brdrwavy" => flag("brdrwavy"),
    "brdrwavydb" => flag("brdrwavydb"),
    "brdrdashdotstr" => flag("brdrdashdotstr"),
    "brdremboss" => flag("brdremboss"),
    "brdrengrave" => flag("brdrengrave"),
    "brdrframe" => flag("brdrframe"),
    "brdrnone" => flag("brdrnone"),
    "brdrnil" => flag("brdrnil"),
    "brdrtbl" => flag("brdrtbl"),
    "brdrw" => value("brdrw"),
    "brdrcf" => value("brdrcf"),
    "brsp" => value("brsp"),
    "shading" => value("shading"),
    "cfpat" => value("cfpat"),
    "cbpat" => value("cbpat"),
    "bghoriz" => flag("bghoriz"),
    "bgvert" => flag("bgvert"),
    "bgfdiag" => flag("bgfdiag"),
    "bgbdiag" => flag("bgbdiag"),
    "bgcross" => flag("bgcross"),
    "bgdcross" => flag("bgdcross"),
    "bgdkhoriz" => flag("bgdkhoriz"),
    "bgdkvert" => flag("bgdkvert"),
    "bgdkfdiag" => flag("bgdkfdiag"),
    "bgdkbdiag" => flag("bgdkbdiag"),
    "bgdkcross" => flag("bgdkcross"),
    "bgdkdcross" => flag("bgdkdcross"),

    // Positioned objects and frames
    "absw" => value("absw"),
    "absh" => value("absh"),
    "abslock" => flag("abslock"),
    "phmrg" => flag("phmrg"),
    "phpg" => flag("phpg"),
    "phcol" => flag("phcol"),
    "posx" => value("posx"),
    "posxc" => flag("posxc"),
    "posxi" => flag("posxi"),
    "posxo" => flag("posxo"),
    "posxl" => flag("posxl"),
    "posxr" => flag("posxr"),
    "posnegx" => value("posnegx"),
    "pvmrg" => flag("pvmrg"),
    "pvpg" => flag("pvpg"),
    "pvpara" => flag("pvpara"),
    "posy" => value("posy"),
    "posyil" => flag("posyil"),
    "posyin" => flag("posyin"),
    "posyt" => flag("posyt"),
    "posyc" => flag("posyc"),
    "posyb" => flag("posyb"),
    "posyout" => flag("posyout"),
    "posnegy" => value("posnegy"),
    "dxfrtext" => value("dxfrtext"),
    "dfrmtxtx" => value("dfrmtxtx"),
    "dfrmtxty" => value("dfrmtxty"),
    "overlay" => flag("overlay"),
    "wrapdefault" => flag("wrapdefault"),
    "wraparound" => flag("wraparound"),
    "wraptight" => flag("wraptight"),
    "wrapthrough" => flag("wrapthrough"),
    "nowrap" => flag("nowrap"),
    "dropcapli" => value("dropcapli"),
    "dropcapt" => value("dropcapt"),
    "absnoovrlp" => value("absnoovrlp"),
    "frmtxlrtb" => flag("frmtxlrtb"),
    "frmtxtbrl" => flag("frmtxtbrl"),
    "frmtxbtlr" => flag("frmtxbtlr"),
    "frmtxlrtbv" => flag("frmtxlrtbv"),
    "frmtxtbrlv" => flag("frmtxtbrlv"),

    // Style sheet
    "cs" => value_of("cs", K::CharacterStyle),
    "ds" => value_of("ds", K::SectionStyle),
    "ts" => value_of("ts", K::TableStyle),
    "sbasedon" => value_of("sbasedon", K::BasedOn),
    "snext" => value_of("snext", K::NextStyle),
    "slink" => value("slink"),
    "sautoupd" => flag("sautoupd"),
    "shidden" => flag_on("shidden", K::HiddenStyle),
    "additive" => flag_on("additive", K::AdditiveStyle),
    "spersonal" => flag("spersonal"),
    "scompose" => flag("scompose"),
    "sreply" => flag("sreply"),
    "slocked" => flag("slocked"),
    "ssemihidden" => value("ssemihidden"),
    "sqformat" => flag("sqformat"),
    "spriority" => value("spriority"),
    "sunhideused" => value("sunhideused"),
    "keycode" => dest_named("keycode"),
    "alt" => flag("alt"),
    "shift" => flag("shift"),
    "ctrl" => flag("ctrl"),
    "fn" => value("fn"),
    "tsrowd" => flag("tsrowd"),
    "tscellwidth" => value("tscellwidth"),
    "tscellwidthfts" => value("tscellwidthfts"),
    "tscellpaddt" => value("tscellpaddt"),
    "tscellpaddl" => value("tscellpaddl"),
    "tscellpaddr" => value("tscellpaddr"),
    "tscellpaddb" => value("tscellpaddb"),
    "tscellpaddft" => value("tscellpaddft"),
    "tscellpaddfl" => value("tscellpaddfl"),
    "tscellpaddfr" => value("tscellpaddfr"),
    "tscellpaddfb" => value("tscellpaddfb"),
    "tsvertalt" => flag("tsvertalt"),
    "tsvertalc" => flag("tsvertalc"),
    "tsvertalb" => flag("tsvertalb"),
    "tsnowrap" => flag("tsnowrap"),
    "tscbandsh" => value("tscbandsh"),
    "tscbandsv" => value("tscbandsv"),
    "tsbrdrt" => flag("tsbrdrt"),
    "tsbrdrb" => flag("tsbrdrb"),
    "tsbrdrl" => flag("tsbrdrl"),
    "tsbrdrr" => flag("tsbrdrr"),
    "tsbrdrh" => flag("tsbrdrh"),
    "tsbrdrv" => flag("tsbrdrv"),
    "tsbrdrdgl" => flag("tsbrdrdgl"),
    "tsbrdrdgr" => flag("tsbrdrdgr"),
    "tscellcfpat" => value("tscellcfpat"),
    "tscellcbpat" => value("tscellcbpat"),
    "tscellpct" => value("tscellpct"),
    "tsbghoriz" => flag("tsbghoriz"),
    "tsbgvert" => flag("tsbgvert"),
    "tsbgfdiag" => flag("tsbgfdiag"),
    "tsbgbdiag" => flag("tsbgbdiag"),
    "tsbgcross" => flag("tsbgcross"),
    "tsbgdcross" => flag("tsbgdcross"),
    "tbllkhdrrows" => flag("tbllkhdrrows"),
    "tbllklastrow" => flag("tbllklastrow"),
    "tbllkhdrcols" => flag("tbllkhdrcols"),
    "tbllklastcol" => flag("tbllklastcol"),
    "tbllknocolband" => flag("tbllknocolband"),
    "tbllknorowband" => flag("tbllknorowband"),
    "tbllkborder" => flag("tbllkborder"),
    "tbllkshading" => flag("tbllkshading"),
    "tbllkfont" => flag("tbllkfont"),
    "tbllkcolor" => flag("tbllkcolor"),
    "tbllkbestfit" => flag("tbllkbestfit"),
    "tscfirstrow" => flag("tscfirstrow"),
    "tsclastrow" => flag("tsclastrow"),
    "tscfirstcol" => flag("tscfirstcol"),
    "tsclastcol" => flag("tsclastcol"),
    "tscbandhorzodd" => flag("tscbandhorzodd"),
    "tscbandhorzeven" => flag("tscbandhorzeven"),
    "tscbandvertodd" => flag("tscbandvertodd"),
    "tscbandverteven" => flag("tscbandverteven"),
    "tscnwcell" => flag("tscnwcell"),
    "tscnecell" => flag("tscnecell"),
    "tscswcell" => flag("tscswcell"),
    "tscsecell" => flag("tscsecell"),

    // Character formatting
    "plain" => flag_reset("plain", G::Character),
    "b" => toggle_of("b", K::Bold),
    "i" => toggle_of("i", K::Italic),
    "ul" => toggle_of("ul", K::Underline),
    "ulnone" => flag_assign("ulnone", K::Underline, 0),
    "uldb" => flag_assign("uldb", K::Underline, 2),
    "uld" => flag_assign("uld", K::Underline, 3),
    "ulthd" => flag_assign("ulthd", K::Underline, 3),
    "uldash" => flag_assign("uldash", K::Underline, 4),
    "ulthdash" => flag_assign("ulthdash", K::Underline, 4),
    "ulldash" => flag_assign("ulldash", K::Underline, 4),
    "ulthldash" => flag_assign("ulthldash", K::Underline, 4),
    "uldashd" => flag_assign("uldashd", K::Underline, 5),
    "ulthdashd" => flag_assign("ulthdashd", K::Underline, 5),
    "uldashdd" => flag_assign("uldashdd", K::Underline, 6),
    "ulthdashdd" => flag_assign("ulthdashdd", K::Underline, 6),
    "ulw" => flag_assign("ulw", K::Underline, 7),
    "ulth" => flag_assign("ulth", K::Underline, 8),
    "ulwave" => flag_assign("ulwave", K::Underline, 9),
    "ulhwave" => flag_assign("ulhwave", K::Underline, 9),
    "ululdbwave" => flag_assign("ululdbwave", K::Underline, 9),
    "ulc" => value_of("ulc", K::UnderlineColor),
    "strike" => toggle_of("strike", K::Strike),
    "striked" => toggle_of("striked", K::DoubleStrike),
    "super" => flag_assign("super", K::VerticalAlign, 1),
    "sub" => flag_assign("sub", K::VerticalAlign, 2),
    "nosupersub" => flag_assign("nosupersub", K::VerticalAlign, 0),
    "scaps" => toggle_of("scaps", K::SmallCaps),
    "caps" => toggle_of("caps", K::AllCaps),
    "v" => toggle_of("v", K::Hidden),
    "webhidden" => toggle("webhidden"),
    "outl" => toggle_of("outl", K::Outline),
    "shad" => toggle_of("shad", K::Shadow),
    "embo" => toggle_of("embo", K::Emboss),
    "impr" => toggle_of("impr", K::Imprint),
    "f" => value_def("f", K::FontIndex, 0),
    "fs" => value_def("fs", K::FontSize, 24),
    "afs" => value_with_default("afs", 24),
    "cf" => value_def("cf", K::ForegroundColor, 0),
    "cb" => value_of("cb", K::BackgroundColor),
    "chcbpat" => value_of("chcbpat", K::BackgroundColor),
    "chcfpat" => value("chcfpat"),
    "chshdng" => value("chshdng"),
    "chbghoriz" => flag("chbghoriz"),
    "chbgvert" => flag("chbgvert"),
    "chbgfdiag" => flag("chbgfdiag"),
    "chbgbdiag" => flag("chbgbdiag"),
    "chbgcross" => flag("chbgcross"),
    "chbgdcross" => flag("chbgdcross"),
    "chbgdkhoriz" => flag("chbgdkhoriz"),
    "chbgdkvert" => flag("chbgdkvert"),
    "chbgdkfdiag" => flag("chbgdkfdiag"),
    "chbgdkbdiag" => flag("chbgdkbdiag"),
    "chbgdkcross" => flag("chbgdkcross"),
    "chbgdkdcross" => flag("chbgdkdcross"),
    "chbrdr" => flag("chbrdr"),
    "highlight" => value_of("highlight", K::HighlightColor),
    "expnd" => value("expnd"),
    "expndtw" => value_of("expndtw", K::CharSpacing),
    "charscalex" => value_def("charscalex", K::CharScale, 100),
    "kerning" => value_of("kerning", K::Kerning),
    "lang" => value_of("lang", K::Language),
    "langfe" => value("langfe"),
    "langnp" => value("langnp"),
    "langfenp" => value("langfenp"),
    "alang" => value("alang"),
    "noproof" => flag("noproof"),
    "up" => value_def("up", K::RaisedBy, 6),
    "dn" => value_def("dn", K::LoweredBy, 6),
    "deleted" => toggle("deleted"),
    "revised" => toggle("revised"),
    "revauth" => value("revauth"),
    "revdttm" => value("revdttm"),
    "revauthdel" => value("revauthdel"),
    "revdttmdel" => value("revdttmdel"),
    "crauth" => value("crauth"),
    "crdate" => value("crdate"),
    "mvf" => flag("mvf"),
    "mvt" => flag("mvt"),
    "mvauth" => value("mvauth"),
    "mvdate" => value("mvdate"),
    "ltrch" => flag("ltrch"),
    "rtlch" => flag("rtlch"),
    "loch" => flag("loch"),
    "hich" => flag("hich"),
    "dbch" => flag("dbch"),
    "af" => value("af"),
    "ab" => toggle("ab"),
    "ai" => toggle("ai"),
    "aul" => toggle("aul"),
    "acaps" => toggle("acaps"),
    "ascaps" => toggle("ascaps"),
    "aoutl" => toggle("aoutl"),
    "ashad" => toggle("ashad"),
    "astrike" => toggle("astrike"),
    "aexpnd" => value("aexpnd"),
    "adn" => value_with_default("adn", 6),
    "aup" => value_with_default("aup", 6),
    "acf" => value("acf"),
    "accnone" => flag("accnone"),
    "accdot" => flag("accdot"),
    "acccomma" => flag("acccomma"),
    "acccircle" => flag("acccircle"),
    "accunderdot" => flag("accunderdot"),
    "g" => value("g"),
    "gcw" => value("gcw"),
    "gridtbl" => dest_ex_named("gridtbl"),
    "fittext" => value("fittext"),
    "cgrid" => value("cgrid"),
    "nosectexpand" => flag("nosectexpand"),
    "horzvert" => value("horzvert"),
    "twoinone" => value("twoinone"),
    "animtext" => value("animtext"),
    "cchs" => value("cchs"),

    // Special characters
    "tab" => symbol("tab", "\t"),
    "line" => symbol("line", "\u{2028}"),
    "page" => symbol("page", "\u{000C}"),
    "emdash" => symbol("emdash", "\u{2014}"),
    "endash" => symbol("endash", "\u{2013}"),
    "emspace" => symbol("emspace", "\u{2003}"),
    "enspace" => symbol("enspace", "\u{2002}"),
    "qmspace" => symbol("qmspace", "\u{2005}"),
    "bullet" => symbol("bullet", "\u{2022}"),
    "lquote" => symbol("lquote", "\u{2018}"),
    "rquote" => symbol("rquote", "\u{2019}"),
    "ldblquote" => symbol("ldblquote", "\u{201C}"),
    "rdblquote" => symbol("rdblquote", "\u{201D}"),
    "zwj" => symbol("zwj", "\u{200D}"),
    "zwnj" => symbol("zwnj", "\u{200C}"),
    "ltrmark" => symbol("ltrmark", "\u{200E}"),
    "rtlmark" => symbol("rtlmark", "\u{200F}"),
    "zwbo" => symbol("zwbo", "\u{200B}"),
    "zwnbo" => symbol("zwnbo", "\u{2060}"),
    "~" => symbol("~", "\u{00A0}"),
    "-" => symbol("-", "\u{00AD}"),
    "_" => symbol("_", "\u{2011}"),
    "{" => symbol("{", "{"),
    "}" => symbol("}", "}"),
    "\\" => symbol("\\", "\\"),
    "\n" => symbol("\n", "\n"),
    "\r" => symbol("\r", "\n"),
    "column" => flag("column"),
    "softline" => flag("softline"),
    "softpage" => flag("softpage"),
    "softcol" => flag("softcol"),
    "softlheight" => value("softlheight"),
    "lbr" => value("lbr"),
    "chdate" => flag("chdate"),
    "chdpl" => flag("chdpl"),
    "chdpa" => flag("chdpa"),
    "chtime" => flag("chtime"),
    "chpgn" => flag("chpgn"),
    "chatn" => flag("chatn"),
    ":" => flag(":"),
    "|" => flag("|"),
    "'" => value("'"),
    "*" => flag_on("*", K::IgnorableDestination),

    // Tables
    "cell" => flag("cell"),
    "nestcell" => flag("nestcell"),
    "row" => flag("row"),
    "nestrow" => flag("nestrow"),
    "trowd" => flag_reset("trowd", G::TableRow),
    "irow" => value("irow"),
    "irowband" => value("irowband"),
    "lastrow" => flag("lastrow"),
    "tcelld" => flag("tcelld"),
    "nesttableprops" => dest_ex_named("nesttableprops"),
    "nonesttables" => dest_named("nonesttables"),
    "trgaph" => value_of("trgaph", K::RowGap),
    "trleft" => value_of("trleft", K::RowLeft),
    "trrh" => value_of("trrh", K::RowHeight),
    "trhdr" => flag_on("trhdr", K::RowHeader),
    "trkeep" => flag("trkeep"),
    "trkeepfollow" => flag("trkeepfollow"),
    "trbrdrt" => flag("trbrdrt"),
    "trbrdrb" => flag("trbrdrb"),
    "trbrdrl" => flag("trbrdrl"),
    "trbrdrr" => flag("trbrdrr"),
    "trbrdrh" => flag("trbrdrh"),
    "trbrdrv" => flag("trbrdrv"),
    "trql" => flag_assign("trql", K::RowAlignment, 0),
    "trqr" => flag_assign("trqr", K::RowAlignment, 1),
    "trqc" => flag_assign("trqc", K::RowAlignment, 2),
    "trautofit" => value("trautofit"),
    "trwWidth" => value("trwWidth"),
    "trftsWidth" => value("trftsWidth"),
    "trwWidthB" => value("trwWidthB"),
    "trftsWidthB" => value("trftsWidthB"),
    "trwWidthA" => value("trwWidthA"),
    "trftsWidthA" => value("trftsWidthA"),
    "trpaddl" => value("trpaddl"),
    "trpaddr" => value("trpaddr"),
    "trpaddt" => value("trpaddt"),
    "trpaddb" => value("trpaddb"),
    "trpaddfl" => value("trpaddfl"),
    "trpaddfr" => value("trpaddfr"),
    "trpaddft" => value("trpaddft"),
    "trpaddfb" => value("trpaddfb"),
    "trspdl" => value("trspdl"),
    "trspdr" => value("trspdr"),
    "trspdt" => value("trspdt"),
    "trspdb" => value("trspdb"),
    "trspdfl" => value("trspdfl"),
    "trspdfr" => value("trspdfr"),
    "trspdft" => value("trspdft"),
    "trspdfb" => value("trspdfb"),
    "tblind" => value("tblind"),
    "tblindtype" => value("tblindtype"),
    "taprtl" => flag("taprtl"),
    "rtlrow" => flag("rtlrow"),
    "ltrrow" => flag("ltrrow"),
    "tabsnoovrlp" => flag("tabsnoovrlp"),
    "tdfrmtxtLeft" => value("tdfrmtxtLeft"),
    "tdfrmtxtRight" => value("tdfrmtxtRight"),
    "tdfrmtxtTop" => value("tdfrmtxtTop"),
    "tdfrmtxtBottom" => value("tdfrmtxtBottom"),
    "tphmrg" => flag("tphmrg"),
    "tphpg" => flag("tphpg"),
    "tphcol" => flag("tphcol"),
    "tposx" => value("tposx"),
    "tposnegx" => value("tposnegx"),
    "tposxc" => flag("tposxc"),
    "tposxi" => flag("tposxi"),
    "tposxo" => flag("tposxo"),
    "tposxl" => flag("tposxl"),
    "tposxr" => flag("tposxr"),
    "tpvmrg" => flag("tpvmrg"),
    "tpvpg" => flag("tpvpg"),
    "tpvpara" => flag("tpvpara"),
    "tposy" => value("tposy"),
    "tposnegy" => value("tposnegy"),
    "tposyil" => flag("tposyil"),
    "tposyin" => flag("tposyin"),
    "tposyc" => flag("tposyc"),
    "tposyb" => flag("tposyb"),
    "tposyt" => flag("tposyt"),
    "tposyout" => flag("tposyout"),
    "trcbpat" => value("trcbpat"),
    "trcfpat" => value("trcfpat"),
    "trpat" => value("trpat"),
    "trshdng" => value("trshdng"),
    "trbghoriz" => flag("trbghoriz"),
    "trbgvert" => flag("trbgvert"),
    "trbgfdiag" => flag("trbgfdiag"),
    "trbgbdiag" => flag("trbgbdiag"),
    "trbgcross" => flag("trbgcross"),
    "trbgdcross" => flag("trbgdcross"),
    "trauth" => value("trauth"),
    "trdate" => value("trdate"),
    "cellx" => value_of("cellx", K::CellBoundary),
    "clmgf" => flag("clmgf"),
    "clmrg" => flag("clmrg"),
    "clvmgf" => flag("clvmgf"),
    "clvmrg" => flag("clvmrg"),
    "clvertalt" => flag("clvertalt"),
    "clvertalc" => flag("clvertalc"),
    "clvertalb" => flag("clvertalb"),
    "clbrdrt" => flag("clbrdrt"),
    "clbrdrb" => flag("clbrdrb"),
    "clbrdrl" => flag("clbrdrl"),
    "clbrdrr" => flag("clbrdrr"),
    "cldglu" => flag("cldglu"),
    "cldgll" => flag("cldgll"),
    "clshdng" => value("clshdng"),
    "clcfpat" => value("clcfpat"),
    "clcbpat" => value("clcbpat"),
    "clwWidth" => value("clwWidth"),
    "clftsWidth" => value("clftsWidth"),
    "clpadl" => value("clpadl"),
    "clpadt" => value("clpadt"),
    "clpadr" => value("clpadr"),
    "clpadb" => value("clpadb"),
    "clpadfl" => value("clpadfl"),
    "clpadft" => value("clpadft"),
    "clpadfr" => value("clpadfr"),
    "clpadfb" => value("clpadfb"),
    "clspl" => value("clspl"),
    "clspt" => value("clspt"),
    "clspr" => value("clspr"),
    "clspb" => value("clspb"),
    "clspfl" => value("clspfl"),
    "clspft" => value("clspft"),
    "clspfr" => value("clspfr"),
    "clspfb" => value("clspfb"),
    "clNoWrap" => flag("clNoWrap"),
    "clFitText" => flag("clFitText"),
    "cltxlrtb" => flag("cltxlrtb"),
    "cltxtbrl" => flag("cltxtbrl"),
    "cltxbtlr" => flag("cltxbtlr"),
    "cltxlrtbv" => flag("cltxlrtbv"),
    "cltxtbrlv" => flag("cltxtbrlv"),
    "clhidemark" => flag("clhidemark"),
    "clbghoriz" => flag("clbghoriz"),
    "clbgvert" => flag("clbgvert"),
    "clbgfdiag" => flag("clbgfdiag"),
    "clbgbdiag" => flag("clbgbdiag"),
    "clbgcross" => flag("clbgcross"),
    "clbgdcross" => flag("clbgdcross"),
    "clbgdkhor" => flag("clbgdkhor"),
    "clbgdkvert" => flag("clbgdkvert"),
    "clbgdkfdiag" => flag("clbgdkfdiag"),
    "clbgdkbdiag" => flag("clbgdkbdiag"),
    "clbgdkcross" => flag("clbgdkcross"),
    "clbgdkdcross" => flag("clbgdkdcross"),
    "clins" => flag("clins"),
    "cldel" => flag("cldel"),
    "clmrgd" => flag("clmrgd"),
    "clmrgdr" => flag("clmrgdr"),
    "clsplit" => flag("clsplit"),
    "clsplitr" => flag("clsplitr"),
    "clshdrawnil" => flag("clshdrawnil"),
    "clcbpatraw" => value("clcbpatraw"),
    "clcfpatraw" => value("clcfpatraw"),
    "clshdngraw" => value("clshdngraw"),
    "clinsauth" => value("clinsauth"),
    "clinsdttm" => value("clinsdttm"),
    "cldelauth" => value("cldelauth"),
    "cldeldttm" => value("cldeldttm"),
    "clmrgdauth" => value("clmrgdauth"),
    "clmrgddttm" => value("clmrgddttm"),

    // Lists
    "list" => flag("list"),
    "listid" => value_of("listid", K::ListId),
    "listtemplateid" => value_of("listtemplateid", K::ListTemplateId),
    "listsimple" => value_of("listsimple", K::ListSimple),
    "listhybrid" => flag_on("listhybrid", K::ListHybrid),
    "listrestarthdn" => flag("listrestarthdn"),
    "liststyleid" => value("liststyleid"),
    "liststylename" => dest_ex_named("liststylename"),
    "listname" => dest("listname", S::ListTable),
    "listlevel" => flag("listlevel"),
    "levelstartat" => value_of("levelstartat", K::LevelStartAt),
    "levelnfc" => value_of("levelnfc", K::LevelNumberFormat),
    "levelnfcn" => value_of("levelnfcn", K::LevelNumberFormat),
    "leveljc" => value_of("leveljc", K::LevelJustification),
    "leveljcn" => value_of("leveljcn", K::LevelJustification),
    "levelfollow" => value_of("levelfollow", K::LevelFollow),
    "levelold" => value("levelold"),
    "levelprev" => value("levelprev"),
    "levelprevspace" => value("levelprevspace"),
    "levelspace" => value("levelspace"),
    "levelindent" => value("levelindent"),
    "leveltext" => dest("leveltext", S::ListTable),
    "levelnumbers" => dest("levelnumbers", S::ListTable),
    "levellegal" => value_of("levellegal", K::LevelLegal),
    "levelnorestart" => value_of("levelnorestart", K::LevelNoRestart),
    "levelpicture" => value("levelpicture"),
    "levelpicturenosize" => flag("levelpicturenosize"),
    "leveltemplateid" => value("leveltemplateid"),
    "lvltentative" => flag("lvltentative"),
    "listoverride" => flag("listoverride"),
    "listoverridecount" => value_of("listoverridecount", K::ListOverrideCount),
    "listoverridestartat" => flag("listoverridestartat"),
    "listoverrideformat" => value("listoverrideformat"),
    "lfolevel" => flag("lfolevel"),
    "listpicture" => dest_ex_named("listpicture"),

    // Fonts
    "fnil" => flag_assign("fnil", K::FontFamily, 0),
    "froman" => flag_assign("froman", K::FontFamily, 1),
    "fswiss" => flag_assign("fswiss", K::FontFamily, 2),
    "fmodern" => flag_assign("fmodern", K::FontFamily, 3),
    "fscript" => flag_assign("fscript", K::FontFamily, 4),
    "fdecor" => flag_assign("fdecor", K::FontFamily, 5),
    "ftech" => flag_assign("ftech", K::FontFamily, 6),
    "fbidi" => flag_assign("fbidi", K::FontFamily, 7),
    "fcharset" => value_of("fcharset", K::FontCharset),
    "fprq" => value_of("fprq", K::FontPitch),
    "cpg" => value_of("cpg", K::FontCodePage),
    "panose" => dest_ex_named("panose"),
    "falt" => dest_ex_named("falt"),
    "fname" => dest_ex_named("fname"),
    "fontemb" => dest_ex_named("fontemb"),
    "fontfile" => dest_ex_named("fontfile"),
    "ftnil" => flag("ftnil"),
    "fttruetype" => flag("fttruetype"),
    "flomajor" => flag("flomajor"),
    "fhimajor" => flag("fhimajor"),
    "fdbmajor" => flag("fdbmajor"),
    "fbimajor" => flag("fbimajor"),
    "flominor" => flag("flominor"),
    "fhiminor" => flag("fhiminor"),
    "fdbminor" => flag("fdbminor"),
    "fbiminor" => flag("fbiminor"),

    // Colors
    "red" => value_of("red", K::ColorRed),
    "green" => value_of("green", K::ColorGreen),
    "blue" => value_of("blue", K::ColorBlue),
    "ctint" => value("ctint"),
    "cshade" => value("cshade"),
    "cmaindarkone" => flag("cmaindarkone"),
    "cmainlightone" => flag("cmainlightone"),
    "cmaindarktwo" => flag("cmaindarktwo"),
    "cmainlighttwo" => flag("cmainlighttwo"),
    "caccentone" => flag("caccentone"),
    "caccenttwo" => flag("caccenttwo"),
    "caccentthree" => flag("caccentthree"),
    "caccentfour" => flag("caccentfour"),
    "caccentfive" => flag("caccentfive"),
    "caccentsix" => flag("caccentsix"),
    "chyperlink" => flag("chyperlink"),
    "cfollowedhyperlink" => flag("cfollowedhyperlink"),
    "cbackgroundone" => flag("cbackgroundone"),
    "ctextone" => flag("ctextone"),
    "cbackgroundtwo" => flag("cbackgroundtwo"),
    "ctexttwo" => flag("ctexttwo"),

    // Pictures and binary data
    "pict" => dest("pict", S::Picture),
    "shppict" => dest_ex("shppict", S::Document),
    "nonshppict" => dest("nonshppict", S::Null),
    "emfblip" => flag_assign("emfblip", K::PictureFormat, 1),
    "pngblip" => flag_assign("pngblip", K::PictureFormat, 2),
    "jpegblip" => flag_assign("jpegblip", K::PictureFormat, 3),
    "wmetafile" => flag_assign("wmetafile", K::PictureFormat, 4),
    "macpict" => flag_assign("macpict", K::PictureFormat, 5),
    "dibitmap" => flag_assign("dibitmap", K::PictureFormat, 6),
    "wbitmap" => flag_assign("wbitmap", K::PictureFormat, 7),
    "pmmetafile" => flag_assign("pmmetafile", K::PictureFormat, 8),
    "picw" => value_of("picw", K::PictureWidth),
    "pich" => value_of("pich", K::PictureHeight),
    "picwgoal" => value_of("picwgoal", K::PictureGoalWidth),
    "pichgoal" => value_of("pichgoal", K::PictureGoalHeight),
    "picscalex" => value_of("picscalex", K::PictureScaleX),
    "picscaley" => value_of("picscaley", K::PictureScaleY),
    "picscaled" => flag("picscaled"),
    "piccropt" => value("piccropt"),
    "piccropb" => value("piccropb"),
    "piccropl" => value("piccropl"),
    "piccropr" => value("piccropr"),
    "picprop" => dest_ex_named("picprop"),
    "picbmp" => flag("picbmp"),
    "picbpp" => value("picbpp"),
    "wbmbitspixel" => value("wbmbitspixel"),
    "wbmplanes" => value("wbmplanes"),
    "wbmwidthbytes" => value("wbmwidthbytes"),
    "blipuid" => dest_ex_named("blipuid"),
    "bliptag" => value("bliptag"),
    "blipupi" => value("blipupi"),
    "bin" => value_of("bin", K::BinaryLength),
    "defshp" => flag("defshp"),
    "hl" => dest_ex_named("hl"),
    "hlloc" => dest_ex_named("hlloc"),
    "hlsrc" => dest_ex_named("hlsrc"),
    "hlfr" => dest_ex_named("hlfr"),
    "linkself" => flag("linkself"),

    // Shapes, drawing objects and embedded objects
    "shp" => dest_named("shp"),
    "shpinst" => dest_ex_named("shpinst"),
    "shptxt" => dest_named("shptxt"),
    "shprslt" => dest_named("shprslt"),
    "shpgrp" => dest_named("shpgrp"),
    "sp" => dest_named("sp"),
    "sn" => dest_named("sn"),
    "sv" => dest_named("sv"),
    "shpleft" => value("shpleft"),
    "shptop" => value("shptop"),
    "shpright" => value("shpright"),
    "shpbottom" => value("shpbottom"),
    "shplid" => value("shplid"),
    "shpz" => value("shpz"),
    "shpfhdr" => value("shpfhdr"),
    "shpbxpage" => flag("shpbxpage"),
    "shpbxmargin" => flag("shpbxmargin"),
    "shpbxcolumn" => flag("shpbxcolumn"),
    "shpbxignore" => flag("shpbxignore"),
    "shpbypage" => flag("shpbypage"),
    "shpbymargin" => flag("shpbymargin"),
    "shpbypara" => flag("shpbypara"),
    "shpbyignore" => flag("shpbyignore"),
    "shpwr" => value("shpwr"),
    "shpwrk" => value("shpwrk"),
    "shpfblwtxt" => value("shpfblwtxt"),
    "shplockanchor" => flag("shplockanchor"),
    "do" => dest_named("do"),
    "dobxpage" => flag("dobxpage"),
    "dobxmargin" => flag("dobxmargin"),
    "dobxcolumn" => flag("dobxcolumn"),
    "dobypage" => flag("dobypage"),
    "dobymargin" => flag("dobymargin"),
    "dobypara" => flag("dobypara"),
    "dodhgt" => value("dodhgt"),
    "dolock" => flag("dolock"),
    "dpline" => flag("dpline"),
    "dprect" => flag("dprect"),
    "dpellipse" => flag("dpellipse"),
    "dptxbx" => flag("dptxbx"),
    "dppolyline" => flag("dppolyline"),
    "dparc" => flag("dparc"),
    "dpcallout" => flag("dpcallout"),
    "dpgroup" => flag("dpgroup"),
    "dpendgroup" => flag("dpendgroup"),
    "dpx" => value("dpx"),
    "dpy" => value("dpy"),
    "dpxsize" => value("dpxsize"),
    "dpysize" => value("dpysize"),
    "dptxbxtext" => dest_named("dptxbxtext"),
    "dptxbxmar" => value("dptxbxmar"),
    "object" => dest_named("object"),
    "objemb" => flag("objemb"),
    "objlink" => flag("objlink"),
    "objautlink" => flag("objautlink"),
    "objsub" => flag("objsub"),
    "objpub" => flag("objpub"),
    "objicemb" => flag("objicemb"),
    "objhtml" => flag("objhtml"),
    "objocx" => flag("objocx"),
    "objclass" => dest_ex_named("objclass"),
    "objname" => dest_ex_named("objname"),
    "objtime" => dest_ex_named("objtime"),
    "objdata" => dest_ex_named("objdata"),
    "objalias" => dest_ex_named("objalias"),
    "objsect" => dest_ex_named("objsect"),
    "objitem" => dest_ex_named("objitem"),
    "objtopic" => dest_ex_named("objtopic"),
    "objw" => value("objw"),
    "objh" => value("objh"),
    "objscalex" => value("objscalex"),
    "objscaley" => value("objscaley"),
    "objcropt" => value("objcropt"),
    "objcropb" => value("objcropb"),
    "objcropl" => value("objcropl"),
    "objcropr" => value("objcropr"),
    "objsetsize" => flag("objsetsize"),
    "objalign" => value("objalign"),
    "objtransy" => value("objtransy"),
    "objupdate" => flag("objupdate"),
    "objattph" => flag("objattph"),
    "rsltrtf" => flag("rsltrtf"),
    "rsltpict" => flag("rsltpict"),
    "rsltbmp" => flag("rsltbmp"),
    "rslttxt" => flag("rslttxt"),
    "rslthtml" => flag("rslthtml"),
    "rsltmerge" => flag("rsltmerge"),
    "result" => dest_named("result"),

    // Fields, bookmarks, index and annotations
    "field" => dest("field", S::Document),
    "fldinst" => dest_ex_named("fldinst"),
    "fldrslt" => dest("fldrslt", S::Document),
    "flddirty" => flag("flddirty"),
    "fldedit" => flag("fldedit"),
    "fldlock" => flag("fldlock"),
    "fldpriv" => flag("fldpriv"),
    "fldalt" => flag("fldalt"),
    "fldtype" => dest_ex_named("fldtype"),
    "datafield" => dest_ex_named("datafield"),
    "formfield" => dest_ex_named("formfield"),
    "ffname" => dest_ex_named("ffname"),
    "ffdeftext" => dest_ex_named("ffdeftext"),
    "ffformat" => dest_ex_named("ffformat"),
    "ffhelptext" => dest_ex_named("ffhelptext"),
    "ffstattext" => dest_ex_named("ffstattext"),
    "ffentrymcr" => dest_ex_named("ffentrymcr"),
    "ffexitmcr" => dest_ex_named("ffexitmcr"),
    "ffl" => dest_ex_named("ffl"),
    "fftype" => value("fftype"),
    "ffownhelp" => value("ffownhelp"),
    "ffownstat" => value("ffownstat"),
    "ffprot" => value("ffprot"),
    "ffsize" => value("ffsize"),
    "fftypetxt" => value("fftypetxt"),
    "ffrecalc" => value("ffrecalc"),
    "ffhaslistbox" => value("ffhaslistbox"),
    "ffmaxlen" => value("ffmaxlen"),
    "ffhps" => value("ffhps"),
    "ffdefres" => value("ffdefres"),
    "ffres" => value("ffres"),
    "bkmkstart" => dest_ex_named("bkmkstart"),
    "bkmkend" => dest_ex_named("bkmkend"),
    "bkmkcolf" => value("bkmkcolf"),
    "bkmkcoll" => value("bkmkcoll"),
    "bkmkpub" => flag("bkmkpub"),
    "xe" => dest_named("xe"),
    "txe" => dest_named("txe"),
    "rxe" => dest_named("rxe"),
    "tc" => dest_named("tc"),
    "tcf" => value("tcf"),
    "tcl" => value("tcl"),
    "tcn" => flag("tcn"),
    "bxe" => flag("bxe"),
    "ixe" => flag("ixe"),
    "yxe" => dest_named("yxe"),
    "annotation" => dest_ex_named("annotation"),
    "atnid" => dest_ex_named("atnid"),
    "atnauthor" => dest_ex_named("atnauthor"),
    "atndate" => dest_ex_named("atndate"),
    "atnref" => dest_ex_named("atnref"),
    "atntime" => dest_ex_named("atntime"),
    "atnicn" => dest_ex_named("atnicn"),
    "atnparent" => dest_ex_named("atnparent"),
    "atrfstart" => dest_ex_named("atrfstart"),
    "atrfend" => dest_ex_named("atrfend"),
    "protstart" => dest_ex_named("protstart"),
    "protend" => dest_ex_named("protend"),
    "mmath" => dest_ex_named("mmath"),
    "mmathPict" => dest_ex_named("mmathPict"),
    "oleclsid" => dest_ex_named("oleclsid"),

    // Office math
    "maln" => dest_ex_named("maln"),
    "malnScr" => dest_ex_named("malnScr"),
    "margPr" => dest_ex_named("margPr"),
    "mbaseJc" => dest_ex_named("mbaseJc"),
    "mbegChr" => dest_ex_named("mbegChr"),
    "mborderBox" => dest_ex_named("mborderBox"),
    "mborderBoxPr" => dest_ex_named("mborderBoxPr"),
    "mbox" => dest_ex_named("mbox"),
    "mboxPr" => dest_ex_named("mboxPr"),
    "mbrkBin" => value("mbrkBin"),
    "mbrkBinSub" => value("mbrkBinSub"),
    "mcGp" => value("mcGp"),
    "mcGpRule" => value("mcGpRule"),
    "mchr" => dest_ex_named("mchr"),
    "mcount" => dest_ex_named("mcount"),
    "mcSp" => value("mcSp"),
    "mctrlPr" => dest_ex_named("mctrlPr"),
    "md" => dest_ex_named("md"),
    "mdefJc" => value("mdefJc"),
    "mdeg" => dest_ex_named("mdeg"),
    "mdegHide" => dest_ex_named("mdegHide"),
    "mden" => dest_ex_named("mden"),
    "mdiff" => dest_ex_named("mdiff"),
    "mdispDef" => value("mdispDef"),
    "mdPr" => dest_ex_named("mdPr"),
    "me" => dest_ex_named("me"),
    "mendChr" => dest_ex_named("mendChr"),
    "meqArr" => dest_ex_named("meqArr"),
    "meqArrPr" => dest_ex_named("meqArrPr"),
    "mf" => dest_ex_named("mf"),
    "mfName" => dest_ex_named("mfName"),
    "mfPr" => dest_ex_named("mfPr"),
    "mfunc" => dest_ex_named("mfunc"),
    "mfuncPr" => dest_ex_named("mfuncPr"),
    "mgroupChr" => dest_ex_named("mgroupChr"),
    "mgroupChrPr" => dest_ex_named("mgroupChrPr"),
    "mgrow" => dest_ex_named("mgrow"),
    "mhideBot" => dest_ex_named("mhideBot"),
    "mhideLeft" => dest_ex_named("mhideLeft"),
    "mhideRight" => dest_ex_named("mhideRight"),
    "mhideTop" => dest_ex_named("mhideTop"),
    "minterSp" => value("minterSp"),
    "mintLim" => value("mintLim"),
    "mintraSp" => value("mintraSp"),
    "mjc" => value("mjc"),
    "mlim" => dest_ex_named("mlim"),
    "mlimloc" => dest_ex_named("mlimloc"),
    "mlimLow" => dest_ex_named("mlimLow"),
    "mlimLowPr" => dest_ex_named("mlimLowPr"),
    "mlimUpp" => dest_ex_named("mlimUpp"),
    "mlimUppPr" => dest_ex_named("mlimUppPr"),
    "mlit" => flag("mlit"),
    "mlMargin" => value("mlMargin"),
    "mm" => dest_ex_named("mm"),
    "mmaddfieldname" => dest_ex_named("mmaddfieldname"),
    "mmathFont" => value("mmathFont"),
    "mmaxdist" => dest_ex_named("mmaxdist"),
    "mmc" => dest_ex_named("mmc"),
    "mmcJc" => dest_ex_named("mmcJc"),
    "mmconnectstr" => dest_ex_named("mmconnectstr"),
    "mmconnectstrdata" => dest_ex_named("mmconnectstrdata"),
    "mmcPr" => dest_ex_named("mmcPr"),
    "mmcs" => dest_ex_named("mmcs"),
    "mmdatasource" => dest_ex_named("mmdatasource"),
    "mmheadersource" => dest_ex_named("mmheadersource"),
    "mmmailsubject" => dest_ex_named("mmmailsubject"),
    "mmodso" => dest_ex_named("mmodso"),
    "mmodsofilter" => dest_ex_named("mmodsofilter"),
    "mmodsofldmpdata" => dest_ex_named("mmodsofldmpdata"),
    "mmodsomappedname" => dest_ex_named("mmodsomappedname"),
    "mmodsoname" => dest_ex_named("mmodsoname"),
    "mmodsorecipdata" => dest_ex_named("mmodsorecipdata"),
    "mmodsosort" => dest_ex_named("mmodsosort"),
    "mmodsosrc" => dest_ex_named("mmodsosrc"),
    "mmodsotable" => dest_ex_named("mmodsotable"),
    "mmodsoudl" => dest_ex_named("mmodsoudl"),
    "mmodsoudldata" => dest_ex_named("mmodsoudldata"),
    "mmodsouniquetag" => dest_ex_named("mmodsouniquetag"),
    "mmPr" => dest_ex_named("mmPr"),
    "mmquery" => dest_ex_named("mmquery"),
    "mmr" => dest_ex_named("mmr"),
    "mnary" => dest_ex_named("mnary"),
    "mnaryPr" => dest_ex_named("mnaryPr"),
    "mnoBreak" => dest_ex_named("mnoBreak"),
    "mnum" => dest_ex_named("mnum"),
    "mobjDist" => dest_ex_named("mobjDist"),
    "moMath" => dest_ex_named("moMath"),
    "moMathPara" => dest_ex_named("moMathPara"),
    "moMathParaPr" => dest_ex_named("moMathParaPr"),
    "mopEmu" => dest_ex_named("mopEmu"),
    "mphant" => dest_ex_named("mphant"),
    "mphantPr" => dest_ex_named("mphantPr"),
    "mplcHide" => dest_ex_named("mplcHide"),
    "mpos" => dest_ex_named("mpos"),
    "mpostSp" => value("mpostSp"),
    "mpreSp" => value("mpreSp"),
    "mr" => dest_ex_named("mr"),
    "mrad" => dest_ex_named("mrad"),
    "mradPr" => dest_ex_named("mradPr"),
    "mrMargin" => value("mrMargin"),
    "mrPr" => dest_ex_named("mrPr"),
    "mrSp" => value("mrSp"),
    "mrSpRule" => value("mrSpRule"),
    "mscr" => dest_ex_named("mscr"),
    "msepChr" => dest_ex_named("msepChr"),
    "mshow" => dest_ex_named("mshow"),
    "mshp" => dest_ex_named("mshp"),
    "msmallFrac" => value("msmallFrac"),
    "msPre" => dest_ex_named("msPre"),
    "msPrePr" => dest_ex_named("msPrePr"),
    "msSub" => dest_ex_named("msSub"),
    "msSubPr" => dest_ex_named("msSubPr"),
    "msSubSup" => dest_ex_named("msSubSup"),
    "msSubSupPr" => dest_ex_named("msSubSupPr"),
    "msSup" => dest_ex_named("msSup"),
    "msSupPr" => dest_ex_named("msSupPr"),
    "mstrikeBLTR" => dest_ex_named("mstrikeBLTR"),
    "mstrikeH" => dest_ex_named("mstrikeH"),
    "mstrikeTLBR" => dest_ex_named("mstrikeTLBR"),
    "mstrikeV" => dest_ex_named("mstrikeV"),
    "msty" => dest_ex_named("msty"),
    "msub" => dest_ex_named("msub"),
    "msubHide" => dest_ex_named("msubHide"),
    "msup" => dest_ex_named("msup"),
    "msupHide" => dest_ex_named("msupHide"),
    "mtransp" => dest_ex_named("mtransp"),
    "mtype" => dest_ex_named("mtype"),
    "mvertJc" => dest_ex_named("mvertJc"),
    "mvfmf" => dest_ex_named("mvfmf"),
    "mvfml" => dest_ex_named("mvfml"),
    "mvtof" => dest_ex_named("mvtof"),
    "mvtol" => dest_ex_named("mvtol"),
    "mwrapIndent" => value("mwrapIndent"),
    "mwrapRight" => value("mwrapRight"),
    "mzeroAsc" => dest_ex_named("mzeroAsc"),
    "mzeroDesc" => dest_ex_named("mzeroDesc"),
    "mzeroWid" => dest_ex_named("mzeroWid"),

    // Revision tracking
    "oldcprops" => dest_ex_named("oldcprops"),
    "oldpprops" => dest_ex_named("oldpprops"),
    "oldsprops" => dest_ex_named("oldsprops"),
    "oldtprops" => dest_ex_named("oldtprops"),
    "prauth" => value("prauth"),
    "prdate" => value("prdate"),

    // East Asian typography
    "hres" => value("hres"),
    "vres" => value("vres"),
    "pgnhindia" => flag("pgnhindia"),
    "pgnhindib" => flag("pgnhindib"),
    "pgnhindic" => flag("pgnhindic"),
    "pgnhindid" => flag("pgnhindid"),
    "pgnthaia" => flag("pgnthaia"),
    "pgnthaib" => flag("pgnthaib"),
    "pgnthaic" => flag("pgnthaic"),
    "pgnvieta" => flag("pgnvieta"),
    "pnaiueo" => flag("pnaiueo"),
    "pnaiueod" => flag("pnaiueod"),
    "pniroha" => flag("pniroha"),
    "pnirohad" => flag("pnirohad"),
    "pnbidia" => flag("pnbidia"),
    "pnbidib" => flag("pnbidib"),
    "pndbnumd" => flag("pndbnumd"),
    "pndbnumk" => flag("pndbnumk"),
    "pndbnuml" => flag("pndbnuml"),
    "pndbnumt" => flag("pndbnumt"),
    "pngbnumd" => flag("pngbnumd"),
    "pngbnumk" => flag("pngbnumk"),
    "pngbnuml" => flag("pngbnuml"),
    "pnzodiacd" => flag("pnzodiacd"),
    "pnzodiacl" => flag("pnzodiacl"),

    // Word compatibility options
    "wrppunct" => flag("wrppunct"),
    "dntultrlspc" => flag("dntultrlspc"),
    "spltpgpar" => flag("spltpgpar"),
    "notcvasp" => flag("notcvasp"),
    "notbrkcnstfrctbl" => flag("notbrkcnstfrctbl"),
    "notvatxbx" => flag("notvatxbx"),
    "cachedcolbal" => flag("cachedcolbal"),
    "utinl" => flag("utinl"),
    "newtblstyruls" => flag("newtblstyruls"),
    "autofmtoverride" => flag("autofmtoverride"),
};
