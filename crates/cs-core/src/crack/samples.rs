//! Plaintext used by the cracker tests. Long enough for letter
//! frequencies to settle.

pub const ENGLISH: &str = "It is a truth universally acknowledged, that a single man in possession of a good \
    fortune, must be in want of a wife. However little known the feelings or views of such a \
    man may be on his first entering a neighbourhood, this truth is so well fixed in the \
    minds of the surrounding families, that he is considered the rightful property of some \
    one or other of their daughters. My dear Mr. Bennet, said his lady to him one day, have \
    you heard that Netherfield Park is let at last? Mr. Bennet replied that he had not. But \
    it is, returned she; for Mrs. Long has just been here, and she told me all about it. Mr. \
    Bennet made no answer. Do you not want to know who has taken it? cried his wife \
    impatiently. You want to tell me, and I have no objection to hearing it. This was \
    invitation enough. Why, my dear, you must know, Mrs. Long says that Netherfield is taken \
    by a young man of large fortune from the north of England; that he came down on Monday \
    in a chaise and four to see the place, and was so much delighted with it, that he agreed \
    with Mr. Morris immediately; that he is to take possession before Michaelmas, and some \
    of his servants are to be in the house by the end of next week.";

pub const SPANISH: &str = "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, no ha mucho tiempo que \
    vivía un hidalgo de los de lanza en astillero, adarga antigua, rocín flaco y galgo \
    corredor. Una olla de algo más vaca que carnero, salpicón las más noches, duelos y \
    quebrantos los sábados, lantejas los viernes, algún palomino de añadidura los domingos, \
    consumían las tres partes de su hacienda. El resto della concluían sayo de velarte, \
    calzas de velludo para las fiestas, con sus pantuflos de lo mesmo, y los días de \
    entresemana se honraba con su vellorí de lo más fino. Tenía en su casa una ama que \
    pasaba de los cuarenta, y una sobrina que no llegaba a los veinte, y un mozo de campo y \
    plaza, que así ensillaba el rocín como tomaba la podadera. Frisaba la edad de nuestro \
    hidalgo con los cincuenta años; era de complexión recia, seco de carnes, enjuto de \
    rostro, gran madrugador y amigo de la caza. Quieren decir que tenía el sobrenombre de \
    Quijada, o Quesada, que en esto hay alguna diferencia en los autores que deste caso \
    escriben; aunque por conjeturas verosímiles se deja entender que se llamaba Quijana.";
