//! Roman simplex glyphs in Hershey encoding.
//!
//! Every character of an entry is a coordinate relative to `R`. The first pair holds the left and
//! right bearing, the remaining pairs are vertices, where ` R` lifts the pen.
//! The y-axis points down: capitals span from `F` (-12) to the baseline at `[` (9).

pub const GLYPHS: &[(char, &str)] = &[
    (' ', r"JZ"),
    ('!', r"MWRFRT RRYQZR[SZRY"),
    ('"', r"JZNFNM RVFVM"),
    ('#', r"H]SBLb RYBRb RLOZO RKUYU"),
    ('%', r"F^[FI[ RNFPHPJOLMMKMIKIIJGLFNFPGSHVHYG[F RWTUUTWTYV[X[ZZ[X[VYTWT"),
    ('\'', r"MWRHQGRFSGSIRKQL"),
    ('(', r"KYVBTDRGPKOPOTPYR]T`Vb"),
    (')', r"KYNBPDRGTKUPUTTYR]P`Nb"),
    ('*', r"JZRLRX RMOWU RWOMU"),
    ('+', r"E_RIR[ RIR[R"),
    (',', r"NVSWRXQWRVSWSYQ["),
    ('-', r"E_IR[R"),
    ('.', r"NVRVQWRXSWRV"),
    ('/', r"G][BIb"),
    ('0', r"H\QFNGLJKOKRLWNZQ[S[VZXWYRYOXJVGSFQF"),
    ('1', r"H\NJPISFS["),
    ('2', r"H\LKLJMHNGPFTFVGWHXJXLWNUQK[Y["),
    ('3', r"H\MFXFRNUNWOXPYSYUXXVZS[P[MZLYKW"),
    ('4', r"H\UFKTZT RUFU["),
    ('5', r"H\WFMFLOMNPMSMVNXPYSYUXXVZS[P[MZLYKW"),
    ('6', r"H\XIWGTFRFOGMJLOLTMXOZR[S[VZXXYUYTXQVOSNRNOOMQLT"),
    ('7', r"H\YFO[ RKFYF"),
    ('8', r"H\PFMGLILKMMONSOVPXRYTYWXYWZT[P[MZLYKWKTLRNPQOUNWMXKXIWGTFPF"),
    ('9', r"H\XMWPURRSQSNRLPKMKLLINGQFRFUGWIXMXRWWUZR[P[MZLX"),
    (':', r"NVROQPRQSPRO RRVQWRXSWRV"),
    ('=', r"E_IO[O RIU[U"),
    ('A', r"I[RFJ[ RRFZ[ RMTWT"),
    ('B', r"G\KFK[ RKFTFWGXHYJYLXNWOTP RKPTPWQXRYTYWXYWZT[K["),
    ('C', r"H]ZKYIWGUFQFOGMILKKNKSLVMXOZQ[U[WZYXZV"),
    ('D', r"G\KFK[ RKFRFUGWIXKYNYSXVWXUZR[K["),
    ('E', r"H[LFL[ RLFYF RLPTP RL[Y["),
    ('F', r"HZLFL[ RLFYF RLPTP"),
    ('G', r"H]ZKYIWGUFQFOGMILKKNKSLVMXOZQ[U[WZYXZVZS RUSZS"),
    ('H', r"G]KFK[ RYFY[ RKPYP"),
    ('I', r"NVRFR["),
    ('J', r"JZVFVVUYTZR[P[NZMYLVLT"),
    ('K', r"G\KFK[ RYFKT RPOY["),
    ('L', r"HYLFL[ RL[X["),
    ('M', r"F^JFJ[ RJFR[ RZFR[ RZFZ["),
    ('N', r"G]KFK[ RKFY[ RYFY["),
    ('O', r"G]PFNGLIKKJNJSKVLXNZP[T[VZXXYVZSZNYKXIVGTFPF"),
    ('P', r"G\KFK[ RKFTFWGXHYJYMXOWPTQKQ"),
    ('Q', r"G]PFNGLIKKJNJSKVLXNZP[T[VZXXYVZSZNYKXIVGTFPF RSWY]"),
    ('R', r"G\KFK[ RKFTFWGXHYJYLXNWOTPKP RRPY["),
    ('S', r"H\YIWGTFPFMGKIKKLMMNOOUQWRXSYUYXWZT[P[MZKX"),
    ('T', r"JZRFR[ RKFYF"),
    ('U', r"G]KFKULXNZQ[S[VZXXYUYF"),
    ('V', r"I[JFR[ RZFR["),
    ('W', r"F^HFM[ RRFM[ RRFW[ R\FW["),
    ('X', r"H\KFY[ RYFK["),
    ('Y', r"I[JFRPR[ RZFRP"),
    ('Z', r"H\YFK[ RKFYF RK[Y["),
    ('_', r"JZJ]Z]"),
    ('a', r"I\XMX[ RXPVNTMQMONMPLSLUMXOZQ[T[VZXX"),
    ('b', r"H[LFL[ RLPNNPMSMUNWPXSXUWXUZS[P[NZLX"),
    ('c', r"I[XPVNTMQMONMPLSLUMXOZQ[T[VZXX"),
    ('d', r"I\XFX[ RXPVNTMQMONMPLSLUMXOZQ[T[VZXX"),
    ('e', r"I[LSXSXQWOVNTMQMONMPLSLUMXOZQ[T[VZXX"),
    ('f', r"MYWFUFSGRJR[ ROMVM"),
    ('g', r"I\XMX]W`VaTbQbOa RXPVNTMQMONMPLSLUMXOZQ[T[VZXX"),
    ('h', r"I\MFM[ RMQPNRMUMWNXQX["),
    ('i', r"NVQFRGSFREQF RRMR["),
    ('j', r"MWRFSGTFSERF RSMS^RaPbNb"),
    ('k', r"IZMFM[ RWMMW RQSX["),
    ('l', r"NVRFR["),
    ('m', r"CaGMG[ RGQJNLMOMQNRQR[ RRQUNWMZM\N]Q]["),
    ('n', r"I\MMM[ RMQPNRMUMWNXQX["),
    ('o', r"I\QMONMPLSLUMXOZQ[T[VZXXYUYSXPVNTMQM"),
    ('p', r"H[LMLb RLPNNPMSMUNWPXSXUWXUZS[P[NZLX"),
    ('q', r"I\XMXb RXPVNTMQMONMPLSLUMXOZQ[T[VZXX"),
    ('r', r"KXOMO[ ROSPPRNTMWM"),
    ('s', r"J[XPWNTMQMNNMPNRPSUTWUXWXXWZT[Q[NZMX"),
    ('t', r"MYRFRWSZU[W[ ROMVM"),
    ('u', r"I\MMMWNZP[S[UZXW RXMX["),
    ('v', r"JZLMR[ RXMR["),
    ('w', r"G]JMN[ RRMN[ RRMV[ RZMV["),
    ('x', r"J[MMX[ RXMM["),
    ('y', r"JZLMR[ RXMR[P_NaLbKb"),
    ('z', r"J[XMM[ RMMXM RM[X["),
];
