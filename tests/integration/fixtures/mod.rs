// Golden documents and expected reports shared by integration tests
#![allow(dead_code)]

/// Four-line requirements paragraph with two sentences
pub const SAMPLE_TEXT: &str = "Given an arbitrary text document written in English, write a program that will generate a
concordance, i.e. an alphabetical list of all word occurrences, labeled with word
frequencies.
Bonus: label each word with the sentence numbers in which each occurrence appeared.
";

pub const SAMPLE_EXPECTED: &str = "\
a.\ta           \t{2:1,1}
b.\tall         \t{1:1}
c.\talphabetical\t{1:1}
d.\tan          \t{2:1,1}
e.\tappeared    \t{1:2}
f.\tarbitrary   \t{1:1}
g.\tbonus       \t{1:2}
h.\tconcordance \t{1:1}
i.\tdocument    \t{1:1}
j.\teach        \t{2:2,2}
k.\tenglish     \t{1:1}
l.\tfrequencies \t{1:1}
m.\tgenerate    \t{1:1}
n.\tgiven       \t{1:1}
o.\ti.e.        \t{1:1}
p.\tin          \t{2:1,2}
q.\tlabel       \t{1:2}
r.\tlabeled     \t{1:1}
s.\tlist        \t{1:1}
t.\tnumbers     \t{1:2}
u.\toccurrence  \t{1:2}
v.\toccurrences \t{1:1}
w.\tof          \t{1:1}
x.\tprogram     \t{1:1}
y.\tsentence    \t{1:2}
z.\ttext        \t{1:1}
aa.\tthat        \t{1:1}
bb.\tthe         \t{1:2}
cc.\twhich       \t{1:2}
dd.\twill        \t{1:1}
ee.\twith        \t{2:1,2}
ff.\tword        \t{3:1,1,2}
gg.\twrite       \t{1:1}
hh.\twritten     \t{1:1}
";

/// Dialog with quotes, possessives and a paragraph break
pub const DIALOG_TEXT: &str = "\"Is it James' book?\" she asked.
\"No! It's the students' book,\" he said

Then they left.
";

pub const DIALOG_EXPECTED: &str = "\
a.\tasked    \t{1:2}
b.\tbook     \t{2:1,4}
c.\the       \t{1:4}
d.\tis       \t{1:1}
e.\tit       \t{1:1}
f.\tit's     \t{1:4}
g.\tjames'   \t{1:1}
h.\tleft     \t{1:5}
i.\tno       \t{1:3}
j.\tsaid     \t{1:4}
k.\tshe      \t{1:2}
l.\tstudents'\t{1:4}
m.\tthe      \t{1:4}
n.\tthen     \t{1:5}
o.\tthey     \t{1:5}
";
