//! Compiled-in table data.
//!
//! Kana tables derive from python-romkan, itself based on KAKASI
//! <http://kakasi.namazu.org/>. Canonical tokens are essentially wapuro-style
//! Kunrei-shiki in upper case.

// ---------------------------------------------------------------------------
// Lemma alphabet (whitespace-separated)
// ---------------------------------------------------------------------------

/// Native moras, dakuon, handakuon and youon, plus the nasal, sokuon and
/// chouon markers. `DYA`/`DYU`/`DYO` live in the rare group.
pub const LEMMAS_BASE: &str = "
A  I  U  E  O
KA KI KU KE KO KYA KYU KYO
GA GI GU GE GO GYA GYU GYO
SA SI SU SE SO SYA SYU SYO
ZA ZI ZU ZE ZO ZYA ZYU ZYO
TA TI TU TE TO TYA TYU TYO
DA DI DU DE DO
NA NI NU NE NO NYA NYU NYO
HA HI HU HE HO HYA HYU HYO
BA BI BU BE BO BYA BYU BYO
PA PI PU PE PO PYA PYU PYO
MA MI MU ME MO MYA MYU MYO
YA    YU    YO
RA RI RU RE RO RYA RYU RYO
WA          WO
N'
Q
-
";

/// Moras used in borrowed words.
pub const LEMMAS_BORROWED: &str = "
    UXI       UXE UXO
VA  VI   VU   VE  VO
              SYE
              ZYE
    TEXI TOXU
              TYE
TSA TSI       TSE TSO
    DEXI DOXU
FA  FI        FE  FO
              YE
";

pub const LEMMAS_ARCHAIC: &str = "
    WI        WE
";

pub const LEMMAS_RARE: &str = "
UXA    UXU
               VYA VYU VYO
               DYA DYU DYO
               FYA FYU FYO
    YI
";

/// Catches non-standard use of small kana.
pub const LEMMAS_SMALL_KANA: &str = "XA XI XU XE XO   XYA XYU XYO   XWA";

// ---------------------------------------------------------------------------
// Kana tables
// ---------------------------------------------------------------------------

pub const HIRAGANA: &str = "
あ A,  い I,  う U,  え E,  お O,
か KA, き KI, く KU, け KE, こ KO, きゃ KYA, きゅ KYU, きょ KYO,
が GA, ぎ GI, ぐ GU, げ GE, ご GO, ぎゃ GYA, ぎゅ GYU, ぎょ GYO,
さ SA, し SI, す SU, せ SE, そ SO, しゃ SYA, しゅ SYU, しょ SYO,
ざ ZA, じ ZI, ず ZU, ぜ ZE, ぞ ZO, じゃ ZYA, じゅ ZYU, じょ ZYO,
た TA, ち TI, つ TU, て TE, と TO, ちゃ TYA, ちゅ TYU, ちょ TYO,
だ DA, ぢ DI, づ DU, で DE, ど DO,
な NA, に NI, ぬ NU, ね NE, の NO, にゃ NYA, にゅ NYU, にょ NYO,
は HA, ひ HI, ふ HU, へ HE, ほ HO, ひゃ HYA, ひゅ HYU, ひょ HYO,
ば BA, び BI, ぶ BU, べ BE, ぼ BO, びゃ BYA, びゅ BYU, びょ BYO,
ぱ PA, ぴ PI, ぷ PU, ぺ PE, ぽ PO, ぴゃ PYA, ぴゅ PYU, ぴょ PYO,
ま MA, み MI, む MU, め ME, も MO, みゃ MYA, みゅ MYU, みょ MYO,
や YA,        ゆ YU,        よ YO,
ら RA, り RI, る RU, れ RE, ろ RO, りゃ RYA, りゅ RYU, りょ RYO,
わ WA,                      を WO,
ん N',

うぁ UXA, うぃ UXI,  うぅ UXU,  うぇ UXE, うぉ UXO,
ゔぁ VA,  ゔぃ VI,   ゔ   VU,   ゔぇ VE,  ゔぉ VO,  ゔゃ VYA, ゔゅ VYU, ゔょ VYO,
                               しぇ SYE,
                               じぇ ZYE,
          てぃ TEXI, とぅ TOXU,
                               ちぇ TYE,
つぁ TSA, つぃ TSI,             つぇ TSE, つぉ TSO,
          でぃ DEXI, どぅ DOXU,                     ぢゃ DYA, ぢゅ DYU, ぢょ DYO,
ふぁ FA,  ふぃ FI,              ふぇ FE,  ふぉ FO,  ふゃ FYA, ふゅ FYU, ふょ FYO,
          いぃ YI,              いぇ YE,
          ゐ WI,                ゑ WE,

ぁ XA, ぃ XI, ぅ XU, ぇ XE, ぉ XO, ゃ XYA, ゅ XYU, ょ XYO, ゎ XWA,

っ Q,
ー -
";

pub const KATAKANA: &str = "
ア A,  イ I,  ウ U,  エ E,  オ O,
カ KA, キ KI, ク KU, ケ KE, コ KO, キャ KYA, キュ KYU, キョ KYO,
ガ GA, ギ GI, グ GU, ゲ GE, ゴ GO, ギャ GYA, ギュ GYU, ギョ GYO,
サ SA, シ SI, ス SU, セ SE, ソ SO, シャ SYA, シュ SYU, ショ SYO,
ザ ZA, ジ ZI, ズ ZU, ゼ ZE, ゾ ZO, ジャ ZYA, ジュ ZYU, ジョ ZYO,
タ TA, チ TI, ツ TU, テ TE, ト TO, チャ TYA, チュ TYU, チョ TYO,
ダ DA, ヂ DI, ヅ DU, デ DE, ド DO,
ナ NA, ニ NI, ヌ NU, ネ NE, ノ NO, ニャ NYA, ニュ NYU, ニョ NYO,
ハ HA, ヒ HI, フ HU, ヘ HE, ホ HO, ヒャ HYA, ヒュ HYU, ヒョ HYO,
バ BA, ビ BI, ブ BU, ベ BE, ボ BO, ビャ BYA, ビュ BYU, ビョ BYO,
パ PA, ピ PI, プ PU, ペ PE, ポ PO, ピャ PYA, ピュ PYU, ピョ PYO,
マ MA, ミ MI, ム MU, メ ME, モ MO, ミャ MYA, ミュ MYU, ミョ MYO,
ヤ YA,        ユ YU,        ヨ YO,
ラ RA, リ RI, ル RU, レ RE, ロ RO, リャ RYA, リュ RYU, リョ RYO,
ワ WA,                      ヲ WO,
ン N',

ウァ UXA, ウィ UXI,  ウゥ UXU,  ウェ UXE, ウォ UXO,
ヴァ VA,  ヴィ VI,   ヴ   VU,   ヴェ VE,  ヴォ VO,  ヴャ VYA, ヴュ VYU, ヴョ VYO,
                               シェ SYE,
                               ジェ ZYE,
          ティ TEXI, トゥ TOXU,
                               チェ TYE,
ツァ TSA, ツィ TSI,             ツェ TSE, ツォ TSO,
          ディ DEXI, ドゥ DOXU,                     ヂャ DYA, ヂュ DYU, ヂョ DYO,
ファ FA,  フィ FI,              フェ FE,  フォ FO,  フャ FYA, フュ FYU, フョ FYO,
          イィ YI,              イェ YE,
          ヰ WI,                ヱ WE,

ァ XA, ィ XI, ゥ XU, ェ XE, ォ XO, ャ XYA, ュ XYU, ョ XYO, ヮ XWA,

ッ Q,
ー -
";

// ---------------------------------------------------------------------------
// Romaji base moras
// ---------------------------------------------------------------------------

/// Spellings every romanization scheme agrees on.
pub const ROMAJI_SHARED: &str = "
a  A,  i  I,  u  U,  e  E,  o  O,
ka KA, ki KI, ku KU, ke KE, ko KO, kya KYA, kyu KYU, kyo KYO,
ga GA, gi GI, gu GU, ge GE, go GO, gya GYA, gyu GYU, gyo GYO,
sa SA,        su SU, se SE, so SO,
za ZA,        zu ZU, ze ZE, zo ZO,
ta TA,               te TE, to TO,
da DA,               de DE, do DO,
na NA, ni NI, nu NU, ne NE, no NO, nya NYA, nyu NYU, nyo NYO,
ha HA, hi HI,        he HE, ho HO, hya HYA, hyu HYU, hyo HYO,
ba BA, bi BI, bu BU, be BE, bo BO, bya BYA, byu BYU, byo BYO,
pa PA, pi PI, pu PU, pe PE, po PO, pya PYA, pyu PYU, pyo PYO,
ma MA, mi MI, mu MU, me ME, mo MO, mya MYA, myu MYU, myo MYO,
ya YA,        yu YU,        yo YO,
ra RA, ri RI, ru RU, re RE, ro RO, rya RYA, ryu RYU, ryo RYO,
wa WA,
n' N'
";

pub const NIHON: &str = "
si SI,
zi ZI,
ti TI, tu TU,
di DI, du DU,
hu HU,

sya SYA, syu SYU, syo SYO,
zya ZYA, zyu ZYU, zyo ZYO,
tya TYA, tyu TYU, tyo TYO,
dya DYA, dyu DYU, dyo DYO,

wi WI, we WE, wo WO
";

pub const KUNREI: &str = "
si SI,
zi ZI,
ti TI, tu TU,
hu HU,

sya SYA, syu SYU, syo SYO,
zya ZYA, zyu ZYU, zyo ZYO,
tya TYA, tyu TYU, tyo TYO,

wo WO
";

/// Kunrei writes the ぢ/づ row like the ざ row and drops the archaic `w`.
pub const KUNREI_EMIT_ONLY: &str = "
zi DI, zu DU, zya DYA, zyu DYU, zyo DYO,
i WI, e WE, o WO
";

pub const HEPBURN: &str = "
shi SI,
ji  ZI,
chi TI, tsu TU,
fu  HU,

sha SYA, shu SYU, sho SYO,
ja  ZYA, ju  ZYU, jo  ZYO,
cha TYA, chu TYU, cho TYO,

wo WO
";

pub const HEPBURN_EMIT_ONLY: &str = "
ji DI, zu DU, ja DYA, ju DYU, jo DYO,
i WI, e WE, o WO
";

/// Loanword spellings accepted by (non-strict) Hepburn.
pub const HEPBURN_EXTENDED: &str = "
         wi  UXI,           we  UXE, wo  UXO,
va  VA,  vi  VI,   vu VU,   ve  VE,  vo  VO,
                            she SYE,
                            je  ZYE,
         ti  TEXI, tu TOXU,
                            che TYE,
tsa TSA, tsi TSI,           tse TSE, tso TSO,
         di  DEXI, du DOXU,
fa  FA,  fi  FI,            fe  FE,  fo  FO,
                            ye  YE
";

pub const HEPBURN_RARE: &str = "
wu  UXU,
vya VYA, vyu VYU, vyo VYO,
fya FYA, fyu FYU, fyo FYO,
yi  YI
";

pub const HEPBURN_RARE_EMIT_ONLY: &str = "
wa UXA
";

/// Keyboard spellings: every lemma reachable by typing.
pub const WAPURO: &str = "
si SI, zi ZI, ti TI, tu TU, di DI, du DU, hu HU, fu HU,

sya SYA, syu SYU, syo SYO,
zya ZYA, zyu ZYU, zyo ZYO,
tya TYA, tyu TYU, tyo TYO,
dya DYA, dyu DYU, dyo DYO,
                      wo  WO,

uxa UXA, uxi  UXI,  uxu  UXU, uxe UXE, uxo UXO,
va  VA,  vi   VI,   vu   VU,  ve  VE,  vo  VO,  vya VYA, vyu VYU, vyo VYO,
                              sye SYE,
                              zye ZYE,
         texi TEXI, toxu TOXU,
                              tye TYE,
tsa TSA, tsi  TSI,            tse TSE, tso TSO,
         dexi DEXI, doxu DOXU,
fa  FA,  fi   FI,             fe  FE,  fo  FO,  fya FYA, fyu FYU, fyo FYO,
         yi   YI,             ye  YE,
         wi   WI,             we  WE,

xa XA, xi XI, xu XU, xe XE, xo XO, xya XYA, xyu XYU, xyo XYO, xwa XWA
";

// ---------------------------------------------------------------------------
// Sokuon (gemination)
// ---------------------------------------------------------------------------

pub const SOKUON_BASE: &str = "
kk QK,
gg QG,
ss QS,
zz QZ,
tt QT,
dd QD,
hh QH,
bb QB,
pp QP
";

pub const SOKUON_HEPBURN: &str = "
tch QCH,
jj  QJ
";

pub const SOKUON_HEPBURN_EXTENDED: &str = "
ff QF
";

/// Wapuro doubles loanword consonants and spells a lone sokuon `xtu`.
pub const SOKUON_WAPURO: &str = "
ff  QF,
vv  QV,
xtu Q
";

// ---------------------------------------------------------------------------
// Chouon (vowel length)
// ---------------------------------------------------------------------------

pub const CHOUON_MACRON: &str = "
ā A-,
ī I-,
ū U-,
ē E-,
ō O-
";

pub const CHOUON_CIRCUMFLEX: &str = "
â A-,
î I-,
û U-,
ê E-,
ô O-
";

pub const CHOUON_DOUBLE_VOWEL: &str = "
aa A-,
ii I-,
uu U-,
ee E-,
oo O-
";

pub const CHOUON_HYPHEN: &str = "
a- A-,
i- I-,
u- U-,
e- E-,
o- O-
";

/// Every pair table, for bulk well-formedness checks and dumps.
pub const ALL_TABLES: &[(&str, &str)] = &[
    ("hiragana", HIRAGANA),
    ("katakana", KATAKANA),
    ("romaji-shared", ROMAJI_SHARED),
    ("nihon", NIHON),
    ("kunrei", KUNREI),
    ("kunrei-emit-only", KUNREI_EMIT_ONLY),
    ("hepburn", HEPBURN),
    ("hepburn-emit-only", HEPBURN_EMIT_ONLY),
    ("hepburn-extended", HEPBURN_EXTENDED),
    ("hepburn-rare", HEPBURN_RARE),
    ("hepburn-rare-emit-only", HEPBURN_RARE_EMIT_ONLY),
    ("wapuro", WAPURO),
    ("sokuon-base", SOKUON_BASE),
    ("sokuon-hepburn", SOKUON_HEPBURN),
    ("sokuon-hepburn-extended", SOKUON_HEPBURN_EXTENDED),
    ("sokuon-wapuro", SOKUON_WAPURO),
    ("chouon-macron", CHOUON_MACRON),
    ("chouon-circumflex", CHOUON_CIRCUMFLEX),
    ("chouon-double-vowel", CHOUON_DOUBLE_VOWEL),
    ("chouon-hyphen", CHOUON_HYPHEN),
];
